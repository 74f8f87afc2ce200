use serde::{Deserialize, Deserializer, Serialize};

pub mod entry {
    use super::*;

    fn default_tax_rate() -> f64 {
        24.0
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRate {
        Number(f64),
        Text(String),
    }

    /// Accept a number or its text form; a blank value means the default rate.
    fn tax_rate_or_default<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawRate::deserialize(deserializer)? {
            RawRate::Number(rate) => Ok(rate),
            RawRate::Text(text) if text.trim().is_empty() => Ok(default_tax_rate()),
            RawRate::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("invalid tax_rate: {text}"))),
        }
    }

    /// Form payload of `POST /submit/`.
    ///
    /// `tax_rate` defaults to 24 when the field is missing or blank.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryNew {
        pub income: f64,
        pub expenses: f64,
        #[serde(default = "default_tax_rate", deserialize_with = "tax_rate_or_default")]
        pub tax_rate: f64,
        #[serde(default)]
        pub description: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: i32,
        pub income: f64,
        pub expenses: f64,
        pub tax_amount: f64,
        pub tax_rate: f64,
        pub description: Option<String>,
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct TotalsView {
        pub total_income: f64,
        pub total_expenses: f64,
        pub total_tax: f64,
    }

    /// Response of `GET /entries`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryListResponse {
        pub entries: Vec<EntryView>,
        pub totals: TotalsView,
    }
}

#[cfg(test)]
mod tests {
    use super::entry::*;

    #[test]
    fn entry_new_defaults_tax_rate_and_description() {
        let new: EntryNew = serde_json::from_str(r#"{"income":5000,"expenses":1500}"#).unwrap();
        assert_eq!(new.tax_rate, 24.0);
        assert_eq!(new.description, None);
    }

    #[test]
    fn entry_new_keeps_explicit_values() {
        let new: EntryNew = serde_json::from_str(
            r#"{"income":1,"expenses":2,"tax_rate":10.5,"description":"note"}"#,
        )
        .unwrap();
        assert_eq!(new.tax_rate, 10.5);
        assert_eq!(new.description.as_deref(), Some("note"));
    }

    #[test]
    fn blank_text_tax_rate_uses_default() {
        let new: EntryNew =
            serde_json::from_str(r#"{"income":1,"expenses":2,"tax_rate":"  "}"#).unwrap();
        assert_eq!(new.tax_rate, 24.0);
    }

    #[test]
    fn text_tax_rate_is_parsed() {
        let new: EntryNew =
            serde_json::from_str(r#"{"income":1,"expenses":2,"tax_rate":"12.5"}"#).unwrap();
        assert_eq!(new.tax_rate, 12.5);
    }

    #[test]
    fn garbage_tax_rate_is_rejected() {
        let res = serde_json::from_str::<EntryNew>(r#"{"income":1,"expenses":2,"tax_rate":"abc"}"#);
        assert!(res.is_err());
    }
}
