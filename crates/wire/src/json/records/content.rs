use crate::json::{scalar, DecodeError, EncodeError, ObjectDecoder, ObjectEncoder, WireRecord};
use genai_core::{Candidate, FinishReason, GenerateContentResponse, VideoMetadata};

impl WireRecord for VideoMetadata {
    const NAME: &'static str = "VideoMetadata";
    const KEY_ORDER: &'static [&'static str] = &["endOffset", "fps", "startOffset"];

    /// The service needs a start anchor whenever a segment is given, so a
    /// zero start is written as `"0s"` once either offset is set. A zero end
    /// is omitted.
    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.duration("endOffset", self.end_offset)?;
        out.float("fps", self.fps)?;
        if !(self.start_offset.is_zero() && self.end_offset.is_zero()) {
            out.raw("startOffset", scalar::encode_duration(self.start_offset))?;
        }
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(VideoMetadata {
            start_offset: obj.duration("startOffset")?,
            end_offset: obj.duration("endOffset")?,
            fps: obj.opt_float("fps")?,
        })
    }
}

impl WireRecord for Candidate {
    const NAME: &'static str = "Candidate";
    const KEY_ORDER: &'static [&'static str] = &[
        "avgLogprobs",
        "citationMetadata",
        "finishMessage",
        "finishReason",
        "index",
        "tokenCount",
    ];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.float("avgLogprobs", self.avg_logprobs)?;
        out.record("citationMetadata", self.citation_metadata.as_ref())?;
        out.string("finishMessage", &self.finish_message)?;
        out.enum_value(
            "finishReason",
            self.finish_reason.as_ref().map(FinishReason::as_str),
        )?;
        out.opt_int32("index", self.index)?;
        out.opt_int32("tokenCount", self.token_count)?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Candidate {
            avg_logprobs: obj.opt_float("avgLogprobs")?,
            citation_metadata: obj.record("citationMetadata")?,
            finish_message: obj.string("finishMessage")?,
            finish_reason: obj.enum_value("finishReason")?,
            index: obj.opt_int32("index")?,
            token_count: obj.opt_int32("tokenCount")?,
        })
    }
}

impl WireRecord for GenerateContentResponse {
    const NAME: &'static str = "GenerateContentResponse";
    const KEY_ORDER: &'static [&'static str] = &[
        "candidates",
        "modelVersion",
        "responseId",
        "usageMetadata",
        "createTime",
    ];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.record_list("candidates", &self.candidates)?;
        out.string("modelVersion", &self.model_version)?;
        out.string("responseId", &self.response_id)?;
        out.structural("usageMetadata", self.usage_metadata.as_ref())?;
        out.timestamp("createTime", self.create_time.as_ref())?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(GenerateContentResponse {
            candidates: obj.record_list("candidates")?,
            model_version: obj.string("modelVersion")?,
            response_id: obj.string("responseId")?,
            usage_metadata: obj.structural("usageMetadata")?,
            create_time: obj.timestamp("createTime")?,
        })
    }
}
