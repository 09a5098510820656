use crate::core::{AnimationOutcome, Storage};
use crate::utils::error::{AnimatorError, Result};

pub const OUTPUT_FILE_NAME: &str = "animated_graphic.svg";
pub const PREVIEW_FILE_NAME: &str = "animated_graphic.html";
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedResult {
    pub svg_path: String,
    pub preview_path: Option<String>,
    pub media_type: &'static str,
}

/// Writes accepted animations to storage; rejected output is never written.
pub struct ResultPresenter<S: Storage> {
    storage: S,
    output_path: String,
    write_preview: bool,
}

impl<S: Storage> ResultPresenter<S> {
    pub fn new(storage: S, output_path: String, write_preview: bool) -> Self {
        Self {
            storage,
            output_path,
            write_preview,
        }
    }

    pub async fn present(&self, outcome: &AnimationOutcome) -> Result<PresentedResult> {
        let svg = match outcome {
            AnimationOutcome::Accepted { svg } => svg,
            AnimationOutcome::Rejected { .. } => return Err(AnimatorError::InvalidOutputError),
        };

        tracing::debug!("Writing {} ({} bytes)", OUTPUT_FILE_NAME, svg.len());
        self.storage
            .write_file(OUTPUT_FILE_NAME, svg.as_bytes())
            .await?;

        let preview_path = if self.write_preview {
            self.storage
                .write_file(PREVIEW_FILE_NAME, preview_html(svg).as_bytes())
                .await?;
            Some(self.join(PREVIEW_FILE_NAME))
        } else {
            None
        };

        Ok(PresentedResult {
            svg_path: self.join(OUTPUT_FILE_NAME),
            preview_path,
            media_type: SVG_MEDIA_TYPE,
        })
    }

    fn join(&self, file_name: &str) -> String {
        format!("{}/{}", self.output_path.trim_end_matches('/'), file_name)
    }
}

/// Standalone page that renders the SVG inline inside a bordered frame.
pub fn preview_html(svg: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Animated SVG</title>
</head>
<body>
<div style="border: 1px solid #ccc; border-radius: 8px; padding: 20px; text-align: center; background-color: #f9f9f9;">
    <div style="max-width: 100%; height: auto;">
{}
    </div>
</div>
</body>
</html>
"#,
        svg
    )
}

/// Reads an SVG source file; invalid UTF-8 is replaced rather than rejected.
pub async fn read_svg_source<S: Storage>(storage: &S, path: &str) -> Result<String> {
    let bytes = storage.read_file(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
