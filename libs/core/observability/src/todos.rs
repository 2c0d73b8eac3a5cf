//! Counters for todo writes.

use metrics::counter;

/// Todo metrics recorder
pub struct TodoMetrics;

impl TodoMetrics {
    pub fn record_created() {
        Self::record_committed("create");
    }

    pub fn record_updated() {
        Self::record_committed("update");
    }

    pub fn record_deleted() {
        Self::record_committed("delete");
    }

    /// A write whose transaction was rolled back
    pub fn record_failed(operation: &'static str) {
        counter!("todo_operation_failures_total", "operation" => operation).increment(1);
    }

    fn record_committed(operation: &'static str) {
        counter!("todo_operations_total", "operation" => operation).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_counters_are_labelled_by_operation() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            TodoMetrics::record_created();
            TodoMetrics::record_created();
            TodoMetrics::record_deleted();
            TodoMetrics::record_failed("update");
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"todo_operations_total{operation="create"} 2"#));
        assert!(rendered.contains(r#"todo_operations_total{operation="delete"} 1"#));
        assert!(rendered.contains(r#"todo_operation_failures_total{operation="update"} 1"#));
    }
}
