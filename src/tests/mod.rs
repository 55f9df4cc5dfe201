
use super::*;

use std::collections::HashMap;

// --- Test infra

type HeaderSet = HashMap<String, Vec<String>>;

fn header_set<'a>(entries: impl IntoIterator<Item = (&'a str, &'a [&'a str])>) -> HeaderSet {
    entries
        .into_iter()
        .map(|(name, values)| {
            (
                name.to_owned(),
                values.iter().map(|v| (*v).to_owned()).collect(),
            )
        })
        .collect()
}

fn authorization(value: &str) -> HeaderSet {
    header_set([("Authorization", [value].as_slice())])
}

/// Runs the extraction and detaches the result from the headers.
fn extract_owned<H: HeaderMap + ?Sized>(headers: &H) -> Result<String, ExtractError> {
    get_api_key(headers).map(ToOwned::to_owned)
}
