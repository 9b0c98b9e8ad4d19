use indexmap::IndexSet;

use super::table::resolve_or_verbatim;

/// First segment of every trove classifier describing a license.
pub const LICENSE_CLASSIFIER_PREFIX: &str = "License";

/// Category marker that groups OSI licenses but names none itself.
const OSI_APPROVED: &str = "OSI Approved";

/// Extract the license named by a single classifier such as
/// `License :: OSI Approved :: MIT License`.
///
/// Returns `None` for classifiers outside the license taxonomy and for the
/// bare `License :: OSI Approved` marker. Leaves missing from the
/// classification table are returned verbatim.
pub fn license_from_classifier(classifier: &str) -> Option<String> {
    let mut segments = classifier.split("::").map(str::trim);
    if segments.next()? != LICENSE_CLASSIFIER_PREFIX {
        return None;
    }

    let leaf = segments.last()?;
    if leaf.is_empty() || leaf == OSI_APPROVED {
        return None;
    }
    Some(resolve_or_verbatim(leaf))
}

/// Canonical license names for a classifier list, first-seen order.
pub fn classifier_licenses<S: AsRef<str>>(classifiers: &[S]) -> IndexSet<String> {
    classifiers
        .iter()
        .filter_map(|classifier| license_from_classifier(classifier.as_ref()))
        .collect()
}
