//! Query string encoding shared by the search queries.

use chrono::NaiveDate;

/// Ordered list of query parameters.
///
/// Absent filters are simply not pushed. Values are URL-encoded by
/// [`QueryParams::encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: impl ToString) {
        self.0.push((name, value.to_string()));
    }

    pub fn push_opt<T: ToString>(&mut self, name: &'static str, value: Option<&T>) {
        if let Some(value) = value {
            self.push(name, value.to_string());
        }
    }

    /// Push a comma separated list, skipped when empty.
    pub fn push_list<T: AsRef<str>>(&mut self, name: &'static str, values: &[T]) {
        if values.is_empty() {
            return;
        }
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.0.push((name, joined));
    }

    pub fn push_date(&mut self, name: &'static str, date: Option<NaiveDate>) {
        if let Some(date) = date {
            self.push(name, date.format(crate::models::wire::DATE_FORMAT));
        }
    }

    /// Value of the first parameter with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as `name=value&...` without a leading `?`.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
