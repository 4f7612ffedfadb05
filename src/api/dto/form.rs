//! Form payload submitted by the browser create/update forms.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

/// URL-encoded form fields for `POST /create` and `POST /update/{id}`.
///
/// An empty `title` field deserializes to `None`, which means "Untitled" on
/// create and "keep the current title" on update.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct QrForm {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub title: Option<String>,

    pub redirect_url: String,
}
