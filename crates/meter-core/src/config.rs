// File: crates/meter-core/src/config.rs
// Summary: Injected pipeline configuration consolidating the deployment variants.

/// Y-axis padding policy. Both variants shipped in production deployments;
/// pick one per installation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// range <= 100: pad min/max by 1, tick 10; else pad by 10,
    /// tick = max(1, round(range/20)).
    Symmetric,
    /// No lower padding; upper bound = max + 5% of range;
    /// tick = max(1, round(range/20)).
    TopOnly,
}

/// Everything that differed across the near-duplicate upstream variants,
/// injected as one value instead of forked code paths: recognized header
/// labels, columns never offered for charting, the axis padding policy, and
/// the unit suffix per metric column.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Cell values (trimmed, case-folded) that mark the header row and the
    /// datetime column.
    pub header_labels: Vec<String>,
    /// Known non-metric column names excluded from chart selection.
    pub excluded_columns: Vec<String>,
    pub padding: PaddingPolicy,
    /// Column name -> unit suffix for statistic and axis labels.
    pub units: Vec<(String, String)>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            header_labels: vec!["datetime".into(), "วัน-เวลา".into()],
            excluded_columns: vec![
                "meter id".into(),
                "meter_id".into(),
                "status".into(),
            ],
            padding: PaddingPolicy::Symmetric,
            units: vec![
                ("Voltage".into(), "V".into()),
                ("Power".into(), "kW".into()),
                ("Current".into(), "A".into()),
                ("Frequency".into(), "Hz".into()),
                ("Energy".into(), "kWh".into()),
                ("Load".into(), "kVA".into()),
            ],
        }
    }
}

impl PipelineConfig {
    /// Unit suffix for a column, or `""` for columns outside the map.
    pub fn unit_for(&self, column: &str) -> &str {
        self.units
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, unit)| unit.as_str())
            .unwrap_or("")
    }
}
