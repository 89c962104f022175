use crate::json::{DecodeError, EncodeError, ObjectDecoder, ObjectEncoder, WireRecord};
use genai_core::{Checkpoint, TunedModelInfo};

impl WireRecord for Checkpoint {
    const NAME: &'static str = "Checkpoint";
    const KEY_ORDER: &'static [&'static str] = &["checkpointId", "epoch", "step"];

    // epoch and step have no presence marker; zero is written
    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.string("checkpointId", &self.checkpoint_id)?;
        out.big_int("epoch", self.epoch)?;
        out.big_int("step", self.step)?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(Checkpoint {
            checkpoint_id: obj.string("checkpointId")?,
            epoch: obj.big_int("epoch")?,
            step: obj.big_int("step")?,
        })
    }
}

impl WireRecord for TunedModelInfo {
    const NAME: &'static str = "TunedModelInfo";
    const KEY_ORDER: &'static [&'static str] = &["baseModel", "createTime", "updateTime"];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.string("baseModel", &self.base_model)?;
        out.timestamp("createTime", self.create_time.as_ref())?;
        out.timestamp("updateTime", self.update_time.as_ref())?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(TunedModelInfo {
            base_model: obj.string("baseModel")?,
            create_time: obj.timestamp("createTime")?,
            update_time: obj.timestamp("updateTime")?,
        })
    }
}
