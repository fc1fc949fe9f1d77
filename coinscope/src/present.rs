//! Presentation boundary: analysis results handed to a renderer.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use coinscope_core::{
    AlignedTable, CoinscopeError, CorrelationMatrix, IndicatorSeries, RollingCorrelation,
};

/// One renderable analysis result.
///
/// Each variant corresponds to one chart of the analysis output and knows the
/// file stem it is written under.
#[derive(Debug, Clone, Copy)]
pub enum Artifact<'a> {
    /// Price with the short and long moving averages.
    PriceSma(&'a IndicatorSeries),
    /// Rolling volatility.
    Volatility(&'a IndicatorSeries),
    /// Aligned multi-asset price table.
    Table(&'a AlignedTable),
    /// Pairwise correlation heatmap.
    Matrix(&'a CorrelationMatrix),
    /// Rolling correlation of one pair.
    Rolling(&'a RollingCorrelation),
}

impl Artifact<'_> {
    /// File stem (no extension) the artifact is stored under.
    #[must_use]
    pub fn file_stem(&self) -> String {
        let raw = match self {
            Self::PriceSma(s) => format!("{}_price_sma", s.asset),
            Self::Volatility(s) => format!("{}_volatility", s.asset),
            Self::Table(_) => "aligned_prices".to_string(),
            Self::Matrix(_) => "coin_correlation_heatmap".to_string(),
            Self::Rolling(r) => format!("rolling_corr_{}_{}", r.asset_a, r.asset_b),
        };
        sanitize(&raw)
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::PriceSma(_) => "price_sma",
            Self::Volatility(_) => "volatility",
            Self::Table(_) => "aligned_prices",
            Self::Matrix(_) => "correlation_matrix",
            Self::Rolling(_) => "rolling_correlation",
        }
    }
}

/// Renders analysis artifacts somewhere and reports where.
pub trait ChartSink {
    /// Render `artifact` under a human-readable `label`.
    ///
    /// # Errors
    /// Implementations report output failures as `CoinscopeError::Io`.
    fn render(&self, label: &str, artifact: &Artifact<'_>) -> Result<PathBuf, CoinscopeError>;
}

/// Sink writing each artifact as a pretty-printed JSON document.
///
/// Output is deterministic: the same artifact and label always produce the
/// same bytes.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    /// Sink writing into `dir`, created on first render if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[derive(Serialize)]
struct PriceSmaRow {
    ts: DateTime<Utc>,
    price: f64,
    sma_short: Option<f64>,
    sma_long: Option<f64>,
}

#[derive(Serialize)]
struct VolatilityRow {
    ts: DateTime<Utc>,
    volatility: Option<f64>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Payload<'a> {
    PriceSma {
        asset: &'a str,
        short_window: usize,
        long_window: usize,
        points: Vec<PriceSmaRow>,
    },
    Volatility {
        asset: &'a str,
        window: usize,
        points: Vec<VolatilityRow>,
    },
    Table(&'a AlignedTable),
    Matrix(&'a CorrelationMatrix),
    Rolling(&'a RollingCorrelation),
}

#[derive(Serialize)]
struct Document<'a> {
    label: &'a str,
    kind: &'static str,
    data: Payload<'a>,
}

fn payload<'a>(artifact: &Artifact<'a>) -> Payload<'a> {
    match *artifact {
        Artifact::PriceSma(s) => Payload::PriceSma {
            asset: s.asset.as_str(),
            short_window: s.windows.short,
            long_window: s.windows.long,
            points: s
                .points
                .iter()
                .map(|p| PriceSmaRow {
                    ts: p.ts,
                    price: p.price,
                    sma_short: p.sma_short,
                    sma_long: p.sma_long,
                })
                .collect(),
        },
        Artifact::Volatility(s) => Payload::Volatility {
            asset: s.asset.as_str(),
            window: s.windows.volatility,
            points: s
                .points
                .iter()
                .map(|p| VolatilityRow {
                    ts: p.ts,
                    volatility: p.volatility,
                })
                .collect(),
        },
        Artifact::Table(t) => Payload::Table(t),
        Artifact::Matrix(m) => Payload::Matrix(m),
        Artifact::Rolling(r) => Payload::Rolling(r),
    }
}

impl ChartSink for JsonFileSink {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "coinscope::present::render", skip(self, artifact), fields(stem = %artifact.file_stem()))
    )]
    fn render(&self, label: &str, artifact: &Artifact<'_>) -> Result<PathBuf, CoinscopeError> {
        let doc = Document {
            label,
            kind: artifact.kind(),
            data: payload(artifact),
        };
        let mut bytes = serde_json::to_vec_pretty(&doc)
            .map_err(|e| CoinscopeError::Data(format!("serialize {}: {e}", artifact.kind())))?;
        bytes.push(b'\n');

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{}.json", artifact.file_stem()));
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

fn sanitize(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
