use std::io::Read;
use std::path::Path;

use anyhow::Context;
use green_core::report::AnalysisResult;

/// Read a saved analysis payload from `path`, or stdin when `path` is `-`.
pub fn read_analysis(path: &Path) -> anyhow::Result<AnalysisResult> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read analysis payload from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read analysis payload {}", path.display()))?
    };
    parse_analysis(&raw).with_context(|| format!("invalid analysis payload {}", path.display()))
}

/// Decode and validate a success body of the analysis service.
pub fn parse_analysis(raw: &str) -> anyhow::Result<AnalysisResult> {
    let result: AnalysisResult = serde_json::from_str(raw)?;
    result.validate()?;
    Ok(result)
}

/// Write `result` as pretty JSON so `greencheck result --input` can reopen it.
pub fn save_analysis(path: &Path, result: &AnalysisResult) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(result)?;
    std::fs::write(path, body)
        .with_context(|| format!("failed to write analysis payload {}", path.display()))?;
    tracing::debug!(path = %path.display(), "analysis payload saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use green_core::grade::Grade;
    use pretty_assertions::assert_eq;

    use super::{parse_analysis, read_analysis, save_analysis};

    #[test]
    fn save_then_read_keeps_advice_and_grade() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("last.json");
        let result = parse_analysis(r#"{"niveau":"D","message":"m","conseils":["x","y"]}"#)
            .expect("payload should decode");

        save_analysis(&path, &result).expect("save");
        let reread = read_analysis(&path).expect("read");

        assert_eq!(reread.grade(), Grade::D);
        assert_eq!(reread.resolved_advice(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn missing_file_mentions_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = read_analysis(&path).expect_err("should fail");
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[test]
    fn negative_metrics_are_rejected() {
        let err = parse_analysis(
            r#"{"niveau":"A","message":"","diagnostic":{"page_weight_kb":1.0,
            "request_count":1,"image_count":0,"large_image_count":0,
            "inline_script_kb":-2.0,"third_party_requests":0}}"#,
        );
        assert!(err.is_err());
    }
}
