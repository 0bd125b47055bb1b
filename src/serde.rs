use core::{fmt, marker::PhantomData};
use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::SimpleVector;

/// Upper bound on the pre-reservation taken from an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for SimpleVector<T> {
    /// Serialize the live elements as a sequence.
    ///
    /// Spare slots are never serialized.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for SimpleVector<T> {
    /// Deserialize a `SimpleVector` from a sequence.
    ///
    /// The size hint, if any, is used to reserve up front.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SimpleVectorVisitor<T> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de> + Default> Visitor<'de> for SimpleVectorVisitor<T> {
            type Value = SimpleVector<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = match seq.size_hint() {
                    Some(hint) => SimpleVector::with_capacity(hint.min(MAX_PREALLOC)),
                    None => SimpleVector::new(),
                };

                while let Some(element) = seq.next_element()? {
                    vec.push_back(element);
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(SimpleVectorVisitor {
            _marker: PhantomData,
        })
    }
}
