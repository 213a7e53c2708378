//! `Serialize` and `Deserialize` for the data model. Most types derive them;
//! [`Flags`] is written as its raw bit word so unknown bits survive.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::Flags;

impl Serialize for Flags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Flags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Flags::from_bits_retain)
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use crate::{AbsoluteTime, Cookie, Flags, Metadata, Page};

    #[test]
    fn flags() {
        assert_tokens(&Flags::SECURE, &[Token::U32(1)]);
        assert_tokens(&Flags::from_bits_retain(1 << 31 | 4), &[Token::U32(1 << 31 | 4)]);
    }

    #[test]
    fn absolute_time() {
        assert_tokens(&AbsoluteTime::from_secs(-1.5), &[Token::F64(-1.5)]);
    }

    #[test]
    fn metadata() {
        assert_tokens(&Metadata::Boolean(true), &[
            Token::NewtypeVariant { name: "Metadata", variant: "Boolean" },
            Token::Bool(true),
        ]);

        assert_tokens(&Metadata::Data(vec![1, 2]), &[
            Token::NewtypeVariant { name: "Metadata", variant: "Data" },
            Token::Bytes(&[1, 2]),
        ]);

        assert_tokens(&Metadata::Null, &[
            Token::UnitVariant { name: "Metadata", variant: "Null" },
        ]);
    }

    #[test]
    fn page() {
        let page: Page = vec![
            Cookie::build("example.com", "a", "/", "b").secure(true).port(80).comment("c"),
        ].into_iter().collect();

        assert_tokens(&page, &[
            Token::Struct { name: "Page", len: 1 },
            Token::Str("cookies"),
            Token::Seq { len: Some(1) },
            Token::Struct { name: "Cookie", len: 11 },
            Token::Str("version"),
            Token::I32(0),
            Token::Str("flags"),
            Token::U32(1),
            Token::Str("port"),
            Token::Some,
            Token::U16(80),
            Token::Str("url"),
            Token::Str("example.com"),
            Token::Str("name"),
            Token::Str("a"),
            Token::Str("path"),
            Token::Str("/"),
            Token::Str("value"),
            Token::Str("b"),
            Token::Str("comment"),
            Token::Some,
            Token::Str("c"),
            Token::Str("comment_url"),
            Token::None,
            Token::Str("expiration"),
            Token::F64(0.0),
            Token::Str("creation"),
            Token::F64(0.0),
            Token::StructEnd,
            Token::SeqEnd,
            Token::StructEnd,
        ]);
    }
}
