//! Change detection: typed records, baseline snapshots, and the dirty check.
//!
//! A baseline is a deep copy of a record taken at the last successful load or
//! save. It is never mutated in place; save success replaces it wholesale.
//! Comparison is derived structural equality over fully deterministic data
//! (ordered lists, no maps), so reordering a list counts as a change and
//! equality never reports a false "clean".

use crate::errors::SaveError;
use crate::sections::Section;
use crate::uploads::ImageField;
use serde::Serialize;

/// One section's in-memory field values. The shape (set of fields) is fixed
/// per section type; only values mutate.
pub trait Record: Clone + PartialEq + Sized {
    const SECTION: Section;

    /// Wire payload for this section's update endpoint.
    type Payload: Serialize + Sync;

    /// Built-in content used when the section has never been saved or the
    /// backend returns blank fields.
    fn default_content() -> Self;

    /// Every image-bearing field of the record. Records without images keep
    /// the empty default.
    fn image_fields(&self) -> Vec<&ImageField> {
        Vec::new()
    }

    fn image_fields_mut(&mut self) -> Vec<&mut ImageField> {
        Vec::new()
    }

    /// Serialize current values (and staged uploads) into the section's
    /// transport payload.
    fn to_payload(&self) -> Self::Payload;

    /// Parse a fetch response into a record, unwrapping the backend's
    /// response envelope and substituting defaults for blank fields.
    fn from_response(value: serde_json::Value) -> Self;

    fn has_pending_uploads(&self) -> bool {
        self.image_fields().iter().any(|field| field.has_upload())
    }

    /// First staged upload exceeding its byte limit, if any. Staging already
    /// rejects oversize content; the save path re-checks so nothing oversize
    /// can reach the network layer.
    fn oversize_upload(&self) -> Option<SaveError> {
        self.image_fields()
            .iter()
            .find_map(|field| field.oversize_error())
    }

    /// Promote staged uploads into current values. Runs on save success.
    fn absorb_pending_uploads(&mut self) {
        for field in self.image_fields_mut() {
            field.absorb_upload();
        }
    }

    fn discard_pending_uploads(&mut self) {
        for field in self.image_fields_mut() {
            field.discard_upload();
        }
    }

    /// Deep copy suitable for use as a baseline. Baselines never hold staged
    /// uploads.
    fn snapshot(&self) -> Self {
        let mut copy = self.clone();
        copy.discard_pending_uploads();
        copy
    }
}

/// Has anything changed since the baseline? Order-sensitive for lists, and a
/// present staged upload is dirty even when every other field matches.
pub fn is_dirty<R: Record>(current: &R, baseline: &R) -> bool {
    current.has_pending_uploads() || current != baseline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ActivityItem, NavbarRecord, TestimonialsRecord};
    use crate::uploads::AssetKind;

    #[test]
    fn identical_records_are_clean() {
        let record = NavbarRecord::default_content();
        assert!(!is_dirty(&record, &record.snapshot()));
    }

    #[test]
    fn scalar_change_is_dirty() {
        let baseline = NavbarRecord::default_content();
        let mut record = baseline.clone();
        record.temple_name = "Shree Ganesh Mandir".to_string();
        assert!(is_dirty(&record, &baseline));
    }

    #[test]
    fn staged_upload_alone_is_dirty() {
        let baseline = NavbarRecord::default_content();
        let mut record = baseline.clone();
        record
            .logo
            .stage(AssetKind::Logo, "logo.png", "image/png", vec![1])
            .unwrap();
        assert!(is_dirty(&record, &baseline));
    }

    #[test]
    fn snapshot_strips_uploads() {
        let mut record = NavbarRecord::default_content();
        record
            .logo
            .stage(AssetKind::Logo, "logo.png", "image/png", vec![1])
            .unwrap();
        assert!(!record.snapshot().has_pending_uploads());
        // the live record still holds its upload
        assert!(record.has_pending_uploads());
    }

    #[test]
    fn list_reorder_is_dirty() {
        let baseline = TestimonialsRecord::default_content();
        let mut record = baseline.clone();
        record.testimonials.swap(0, 1);
        assert!(is_dirty(&record, &baseline));
    }

    #[test]
    fn add_then_remove_churn_compares_clean() {
        let baseline = crate::records::ActivitiesRecord::default_content();
        let mut record = baseline.clone();
        record.add_activity(ActivityItem {
            name: "Evening Aarti".to_string(),
            category: "puja".to_string(),
            time: "06:30 PM".to_string(),
        });
        assert!(is_dirty(&record, &baseline));

        record.remove_activity(record.activities.len() - 1);
        assert!(!is_dirty(&record, &baseline));
    }
}
