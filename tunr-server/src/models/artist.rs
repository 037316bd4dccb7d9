//! Artist form input

use serde::Deserialize;

/// Fields submitted by the new and edit artist forms.
///
/// All three are required; empty strings are accepted and stored unchanged.
/// Unknown keys (such as the `_method` override field) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub photo_url: String,
    pub nationality: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_extra_method_field() {
        let form: ArtistForm = serde_json::from_value(serde_json::json!({
            "name": "Prince",
            "photo_url": "http://x/p.jpg",
            "nationality": "American",
            "_method": "put",
        }))
        .unwrap();

        assert_eq!(form.name, "Prince");
        assert_eq!(form.nationality, "American");
    }

    #[test]
    fn missing_field_is_rejected() {
        let result: Result<ArtistForm, _> = serde_json::from_value(serde_json::json!({
            "name": "Prince",
            "photo_url": "",
        }));
        assert!(result.is_err());
    }
}
