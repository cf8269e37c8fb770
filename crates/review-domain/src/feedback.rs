/// Structured result of one successful inference call.
///
/// Wire format is camelCase JSON with all four fields required. Typed
/// deserialization is the schema gate: a payload missing a field, or carrying
/// a null where an array belongs, is rejected rather than partially promoted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// All text extracted from the image, line breaks preserved.
    pub extracted_text: String,

    /// Summary at roughly 30-50% of the original length.
    pub summary: String,

    /// 2-3 positive observations about the writing.
    pub praise_points: Vec<String>,

    /// 2+ gently worded improvement suggestions.
    pub improvement_points: Vec<String>,
}

impl Feedback {
    /// Parse raw model output. Trims surrounding whitespace first; the
    /// service occasionally pads the JSON document with newlines.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "extractedText": "春はあけぼの。\nやうやう白くなりゆく山ぎは",
            "summary": "春は夜明けが良い。",
            "praisePoints": ["情景描写が豊か", "リズムが良い"],
            "improvementPoints": ["段落を分けるとさらに読みやすい", "主語を明示すると良い"]
        }"#
    }

    #[test]
    fn parse_well_formed() {
        let fb = Feedback::parse(sample_json()).unwrap();
        assert!(fb.extracted_text.contains('\n'));
        assert_eq!(fb.praise_points.len(), 2);
        assert_eq!(fb.improvement_points.len(), 2);
    }

    #[test]
    fn parse_trims_whitespace() {
        let padded = format!("\n\n  {}  \n", sample_json());
        assert!(Feedback::parse(&padded).is_ok());
    }

    #[test]
    fn missing_field_rejected() {
        for field in [
            "extractedText",
            "summary",
            "praisePoints",
            "improvementPoints",
        ] {
            let mut value: serde_json::Value = serde_json::from_str(sample_json()).unwrap();
            value.as_object_mut().unwrap().remove(field);
            let raw = value.to_string();
            assert!(Feedback::parse(&raw).is_err(), "expected {field} required");
        }
    }

    #[test]
    fn null_array_rejected() {
        let raw = r#"{
            "extractedText": "x",
            "summary": "y",
            "praisePoints": null,
            "improvementPoints": []
        }"#;
        assert!(Feedback::parse(raw).is_err());
    }

    #[test]
    fn empty_arrays_allowed() {
        let raw = r#"{
            "extractedText": "x",
            "summary": "y",
            "praisePoints": [],
            "improvementPoints": []
        }"#;
        let fb = Feedback::parse(raw).unwrap();
        assert!(fb.praise_points.is_empty());
    }

    #[test]
    fn unknown_fields_tolerated() {
        let mut value: serde_json::Value = serde_json::from_str(sample_json()).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("confidence".into(), serde_json::json!(0.9));
        assert!(Feedback::parse(&value.to_string()).is_ok());
    }

    #[test]
    fn serialize_uses_camel_case() {
        let fb = Feedback::parse(sample_json()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&fb).unwrap();
        assert!(json.get("extractedText").is_some());
        assert!(json.get("praisePoints").is_some());
        assert!(json.get("extracted_text").is_none());
    }
}
