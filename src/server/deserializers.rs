use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

// front-ends send ids taken from <select> values as strings ("6"), so both
// JSON numbers and numeric strings are accepted
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "IntOrString")]
pub struct LenientI64(pub i64);

impl TryFrom<IntOrString> for LenientI64 {
    type Error = String;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        match value {
            IntOrString::Int(v) => Ok(LenientI64(v)),
            IntOrString::Str(s) => match s.trim().parse::<i64>() {
                Ok(v) => Ok(LenientI64(v)),
                Err(_) => Err(format!("Wrong value {s}, can not parse to i64")),
            },
        }
    }
}
