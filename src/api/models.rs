use serde::Serialize;
use url::form_urlencoded;

/// Query parameters of `GET /description`. Both default to empty so a
/// missing `name` reaches validation instead of failing extraction.
#[derive(Debug, Default)]
pub struct DescriptionRequest {
    pub name: String,
    pub lang: String,
}

impl DescriptionRequest {
    /// Reads `name` and `lang` from a raw query string. When a key repeats,
    /// the first value wins; unknown keys are ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut name = None;
        let mut lang = None;

        for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "name" if name.is_none() => name = Some(value.into_owned()),
                "lang" if lang.is_none() => lang = Some(value.into_owned()),
                _ => {}
            }
        }

        DescriptionRequest {
            name: name.unwrap_or_default(),
            lang: lang.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DescriptionResult {
    pub name: String,
    pub desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_name_and_lang() {
        let req = DescriptionRequest::from_query(Some("name=Albert%20Einstein&lang=en&x=1"));
        assert_eq!(req.name, "Albert Einstein");
        assert_eq!(req.lang, "en");

        let req = DescriptionRequest::from_query(Some("name=marie+curie"));
        assert_eq!(req.name, "marie curie");
        assert_eq!(req.lang, "");
    }

    #[test]
    fn first_value_wins() {
        let req = DescriptionRequest::from_query(Some("name=Einstein&name=Bohr&lang=de&lang=en"));
        assert_eq!(req.name, "Einstein");
        assert_eq!(req.lang, "de");
    }

    #[test]
    fn missing_query_is_empty() {
        let req = DescriptionRequest::from_query(None);
        assert!(req.name.is_empty());
        assert!(req.lang.is_empty());
    }
}
