use crate::json::{DecodeError, EncodeError, ObjectDecoder, ObjectEncoder, WireRecord};
use genai_core::TokensInfo;

impl WireRecord for TokensInfo {
    const NAME: &'static str = "TokensInfo";
    const KEY_ORDER: &'static [&'static str] = &["tokenIds", "role", "tokens"];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.big_int_list("tokenIds", &self.token_ids)?;
        out.string("role", &self.role)?;
        out.bytes_list("tokens", &self.tokens)?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(TokensInfo {
            role: obj.string("role")?,
            token_ids: obj.big_int_list("tokenIds")?,
            tokens: obj.bytes_list("tokens")?,
        })
    }
}
