use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::io::Write;

use crate::clusterer::{ClusterResult, KmeansConfig, Point, PointList, Termination};
use crate::init::InitStrategy;
use crate::report::format::OutputFormat;

#[derive(Debug, Serialize)]
pub struct ReportStats {
    pub point_count: usize,
    pub dimension: usize,
    pub cluster_count: usize,
    pub iterations: usize,
    pub termination: Termination,
    pub inertia: f64,
}

/// A data point paired with the cluster it was assigned to
#[derive(Debug, Serialize)]
pub struct AssignedPoint {
    pub point: Point,
    pub cluster: usize,
}

/// Everything a consumer needs to reproduce or inspect a run
#[derive(Debug, Serialize)]
pub struct Report {
    pub generator: String,
    pub created_at: String,
    pub source: Option<String>,
    pub config: KmeansConfig,
    pub init: InitStrategy,
    pub stats: ReportStats,
    pub centroids: PointList,
    pub points: Vec<AssignedPoint>,
}

impl Report {
    pub fn new(
        data: &[Point],
        result: &ClusterResult,
        dimension: usize,
        config: KmeansConfig,
        init: InitStrategy,
    ) -> Result<Self> {
        let inertia = result
            .inertia(data)
            .context("Failed to compute within-cluster sum of squares")?;

        let points = data
            .iter()
            .zip(result.assignments.iter())
            .map(|(point, &cluster)| AssignedPoint {
                point: point.clone(),
                cluster,
            })
            .collect();

        Ok(Self {
            generator: format!("lloyd v{}", env!("CARGO_PKG_VERSION")),
            created_at: Utc::now().to_rfc3339(),
            source: None,
            config,
            init,
            stats: ReportStats {
                point_count: data.len(),
                dimension,
                cluster_count: result.centroids.len(),
                iterations: result.iterations,
                termination: result.termination,
                inertia,
            },
            centroids: result.centroids.clone(),
            points,
        })
    }

    /// Record where the data came from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "# centroids").context("Failed to write report")?;
        for (i, centroid) in self.centroids.iter().enumerate() {
            writeln!(out, "{}\t{}", i, join_coords(centroid))
                .context("Failed to write centroid")?;
        }

        writeln!(out, "# assignments").context("Failed to write report")?;
        for assigned in &self.points {
            writeln!(out, "{}\t{}", join_coords(&assigned.point), assigned.cluster)
                .context("Failed to write assignment")?;
        }

        Ok(())
    }

    fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self).context("Failed to serialize report")?;
        writeln!(out).context("Failed to write report")?;
        Ok(())
    }
}

fn join_coords(point: &Point) -> String {
    point
        .coords()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\t")
}
