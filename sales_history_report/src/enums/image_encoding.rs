use crate::common::*;

#[doc = r#"
    How a rendered chart leaves the service.

    * `Base64` - JSON object `{"image": "<base64 png>"}`
    * `Png`    - raw `image/png` body
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageEncoding {
    #[default]
    Base64,
    Png,
}
