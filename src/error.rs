use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested format token is outside {"excel", "pdf"}. The only
    /// error surfaced for bad input; everything else in the pipeline
    /// degrades to sentinel buckets or exclusion.
    #[error("unsupported report format: {0:?}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Tabular(#[from] activa_export_xlsx::TabularError),
    #[error(transparent)]
    Render(#[from] activa_render_pdf::RenderError),
}
