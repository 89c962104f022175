use crate::json::{DecodeError, EncodeError, ObjectDecoder, ObjectEncoder, WireRecord};
use genai_core::{CachedContent, CreateCachedContentConfig, UpdateCachedContentConfig};

impl WireRecord for CreateCachedContentConfig {
    const NAME: &'static str = "CreateCachedContentConfig";
    const KEY_ORDER: &'static [&'static str] = &["displayName", "kmsKeyName", "ttl", "expireTime"];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.string("displayName", &self.display_name)?;
        out.string("kmsKeyName", &self.kms_key_name)?;
        out.duration("ttl", self.ttl)?;
        out.timestamp("expireTime", self.expire_time.as_ref())?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(CreateCachedContentConfig {
            display_name: obj.string("displayName")?,
            kms_key_name: obj.string("kmsKeyName")?,
            ttl: obj.duration("ttl")?,
            expire_time: obj.timestamp("expireTime")?,
        })
    }
}

impl WireRecord for UpdateCachedContentConfig {
    const NAME: &'static str = "UpdateCachedContentConfig";
    const KEY_ORDER: &'static [&'static str] = &["ttl", "expireTime"];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.duration("ttl", self.ttl)?;
        out.timestamp("expireTime", self.expire_time.as_ref())?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(UpdateCachedContentConfig {
            ttl: obj.duration("ttl")?,
            expire_time: obj.timestamp("expireTime")?,
        })
    }
}

impl WireRecord for CachedContent {
    const NAME: &'static str = "CachedContent";
    const KEY_ORDER: &'static [&'static str] = &[
        "name",
        "displayName",
        "model",
        "usageMetadata",
        "createTime",
        "updateTime",
        "expireTime",
    ];

    fn write_fields(&self, out: &mut ObjectEncoder) -> Result<(), EncodeError> {
        out.string("name", &self.name)?;
        out.string("displayName", &self.display_name)?;
        out.string("model", &self.model)?;
        out.structural("usageMetadata", self.usage_metadata.as_ref())?;
        out.timestamp("createTime", self.create_time.as_ref())?;
        out.timestamp("updateTime", self.update_time.as_ref())?;
        out.timestamp("expireTime", self.expire_time.as_ref())?;
        Ok(())
    }

    fn read_fields(obj: &ObjectDecoder<'_>) -> Result<Self, DecodeError> {
        Ok(CachedContent {
            name: obj.string("name")?,
            display_name: obj.string("displayName")?,
            model: obj.string("model")?,
            usage_metadata: obj.structural("usageMetadata")?,
            create_time: obj.timestamp("createTime")?,
            update_time: obj.timestamp("updateTime")?,
            expire_time: obj.timestamp("expireTime")?,
        })
    }
}
