//! Template document updates (the "dismiss error" action and friends).

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::selection::RowId;

/// How the sent document is applied to the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Attributes are merged into the existing document.
    #[default]
    Merge,
    /// The existing document is replaced.
    Replace,
}

impl MergeMode {
    pub const fn replace_flag(self) -> u8 {
        match self {
            MergeMode::Merge => 0,
            MergeMode::Replace => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDocumentRequest {
    pub id: RowId,
    pub template: String,
    pub merge_mode: MergeMode,
}

/// Request body of `PUT /api/{resource}/update/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDocumentBody {
    pub template: String,
    pub replace: u8,
}

impl UpdateDocumentRequest {
    pub fn merge(id: RowId, template: impl Into<String>) -> Self {
        Self {
            id,
            template: template.into(),
            merge_mode: MergeMode::Merge,
        }
    }

    pub fn body(&self) -> UpdateDocumentBody {
        UpdateDocumentBody {
            template: self.template.clone(),
            replace: self.merge_mode.replace_flag(),
        }
    }
}

/// Something that can carry an error marker in its user template.
pub trait ErrorMarked {
    fn row_id(&self) -> RowId;
    fn has_error(&self) -> bool;
}

/// Sends template updates to the API.
#[allow(async_fn_in_trait)]
pub trait DocumentService {
    async fn update_document(&self, request: UpdateDocumentRequest) -> Result<(), ApiError>;
}

/// Document that blanks the error markers of a user template.
pub fn error_clearing_document() -> String {
    "<TEMPLATE><ERROR></ERROR><SCHED_MESSAGE></SCHED_MESSAGE></TEMPLATE>".to_string()
}

/// Issues exactly one merge update for `id`.
pub async fn dismiss_error<S: DocumentService>(
    service: &S,
    id: RowId,
    document: &str,
) -> Result<(), ApiError> {
    service
        .update_document(UpdateDocumentRequest::merge(id, document))
        .await
}

/// One merge update per item carrying an error. Stops at the first failure
/// and returns the ids that were cleared before it.
pub async fn clear_errors<S, T>(service: &S, items: &[T]) -> Result<Vec<RowId>, (Vec<RowId>, ApiError)>
where
    S: DocumentService,
    T: ErrorMarked,
{
    let document = error_clearing_document();
    let mut cleared = Vec::new();
    for item in items.iter().filter(|i| i.has_error()) {
        let id = item.row_id();
        match dismiss_error(service, id, &document).await {
            Ok(()) => cleared.push(id),
            Err(err) => return Err((cleared, err)),
        }
    }
    Ok(cleared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<UpdateDocumentRequest>>,
        fail_on: Option<RowId>,
    }

    impl DocumentService for Recorder {
        async fn update_document(&self, request: UpdateDocumentRequest) -> Result<(), ApiError> {
            let id = request.id;
            self.calls.borrow_mut().push(request);
            if self.fail_on == Some(id) {
                return Err(ApiError::Status {
                    status: 500,
                    message: "update failed".to_string(),
                });
            }
            Ok(())
        }
    }

    struct Row(RowId, bool);

    impl ErrorMarked for Row {
        fn row_id(&self) -> RowId {
            self.0
        }
        fn has_error(&self) -> bool {
            self.1
        }
    }

    #[test]
    fn test_dismiss_error_issues_one_merge_update() {
        let service = Recorder::default();
        block_on(dismiss_error(&service, 42, "<TEMPLATE/>")).unwrap();

        let calls = service.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            UpdateDocumentRequest {
                id: 42,
                template: "<TEMPLATE/>".to_string(),
                merge_mode: MergeMode::Merge,
            }
        );
        assert_eq!(calls[0].body().replace, 0);
    }

    #[test]
    fn test_body_wire_format() {
        let body = UpdateDocumentRequest::merge(1, "<TEMPLATE/>").body();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "template": "<TEMPLATE/>", "replace": 0 })
        );
        assert_eq!(MergeMode::Replace.replace_flag(), 1);
    }

    #[test]
    fn test_clear_errors_only_touches_errored_rows() {
        let service = Recorder::default();
        let rows = [Row(1, true), Row(2, false), Row(3, true)];
        assert_eq!(block_on(clear_errors(&service, &rows)), Ok(vec![1, 3]));
        assert_eq!(service.calls.borrow().len(), 2);
        assert!(service
            .calls
            .borrow()
            .iter()
            .all(|c| c.template == error_clearing_document() && c.merge_mode == MergeMode::Merge));
    }

    #[test]
    fn test_clear_errors_stops_on_failure() {
        let service = Recorder {
            fail_on: Some(3),
            ..Recorder::default()
        };
        let rows = [Row(1, true), Row(3, true), Row(5, true)];
        let (cleared, err) = block_on(clear_errors(&service, &rows)).unwrap_err();
        assert_eq!(cleared, vec![1]);
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(service.calls.borrow().len(), 2);
    }
}
