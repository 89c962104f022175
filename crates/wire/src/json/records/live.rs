use crate::json::{DecodeError, EncodeError, ObjectDecoder, ObjectEncoder, WireRecord};
use genai_core::{ContextWindowCompressionConfig, SlidingWindow};

impl WireRecord for SlidingWindow {
    const NAME: &'static str = "SlidingWindow";
    const KEY_ORDER: &'static [&'static str] = &["targetTokens"];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.opt_big_int("targetTokens", self.target_tokens)
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(SlidingWindow {
            target_tokens: obj.opt_big_int("targetTokens")?,
        })
    }
}

impl WireRecord for ContextWindowCompressionConfig {
    const NAME: &'static str = "ContextWindowCompressionConfig";
    const KEY_ORDER: &'static [&'static str] = &["triggerTokens", "slidingWindow"];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.opt_big_int("triggerTokens", self.trigger_tokens)?;
        out.record("slidingWindow", self.sliding_window.as_ref())?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(ContextWindowCompressionConfig {
            trigger_tokens: obj.opt_big_int("triggerTokens")?,
            sliding_window: obj.record("slidingWindow")?,
        })
    }
}
