use std::collections::BTreeMap;

use log::debug;

use super::{PlotTemplate, RenderError};
use crate::series::{ComparisonSet, Series};

/// Version plot: two systems, x = number of versions.
pub const VERSIONS_TEMPLATE: &str = r"\begin{tikzpicture}
\begin{axis}[
    xlabel={Num versions},
    ylabel={<<ylabel>>},
    grid=major,
    legend pos=north west,
]
\addplot[mark=x, blue] coordinates {
    <<coords_a>>
};
\addplot[mark=*, red] coordinates {
    <<coords_b>>
};
\legend{<<legend_a>>,<<legend_b>>}
\end{axis}
\end{tikzpicture}";

/// Scale plot: one system, x = tail latency, y = throughput.
pub const SCALE_TEMPLATE: &str = r"\begin{tikzpicture}
\begin{axis}[
    xlabel={<<xlabel>>},
    ylabel={<<ylabel>>},
    grid=major,
    legend pos=north west,
]
\addplot[mark=*, blue] coordinates {
    <<coords>>
};
\legend{<<legend>>}
\end{axis}
\end{tikzpicture}";

/// Scale plot without a legend, for figures with a single unlabeled line.
pub const SCALE_NO_LEGEND_TEMPLATE: &str = r"\begin{tikzpicture}
\begin{axis}[
    xlabel={<<xlabel>>},
    ylabel={<<ylabel>>},
    grid=major,
]
\addplot[mark=*, blue] coordinates {
    <<coords>>
};
\end{axis}
\end{tikzpicture}";

/// A named plot template.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    name: String,
    template: PlotTemplate,
}

impl PlotSpec {
    /// Parse a plot spec from template source
    pub fn new(name: impl Into<String>, source: &str) -> Result<Self, RenderError> {
        Ok(Self {
            name: name.into(),
            template: PlotTemplate::parse(source)?,
        })
    }

    /// Built-in two-system version plot
    pub fn versions() -> Result<Self, RenderError> {
        Self::new("versions", VERSIONS_TEMPLATE)
    }

    /// Built-in latency-vs-throughput scatter
    pub fn scale() -> Result<Self, RenderError> {
        Self::new("scale", SCALE_TEMPLATE)
    }

    /// Built-in latency-vs-throughput scatter with no `\legend` line
    pub fn scale_without_legend() -> Result<Self, RenderError> {
        Self::new("scale", SCALE_NO_LEGEND_TEMPLATE)
    }

    /// Name of the spec
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying template
    pub fn template(&self) -> &PlotTemplate {
        &self.template
    }

    /// Render one field of both series against the version index.
    ///
    /// Placeholders: `ylabel`, `coords_a`, `coords_b`, `legend_a`, `legend_b`.
    pub fn render_comparison(
        &self,
        set: &ComparisonSet,
        field: &str,
        legends: [&str; 2],
    ) -> Result<String, RenderError> {
        for series in [set.a(), set.b()] {
            if series.is_empty() {
                return Err(RenderError::EmptySeries(series.source()));
            }
        }

        let (_, spec) = set.a().field(field)?;
        let (coords_a, coords_b) = set.indexed(field)?;
        debug!(
            "Rendering {} plot for '{}': {} vs {} points",
            self.name,
            field,
            coords_a.len(),
            coords_b.len()
        );

        let mut values = BTreeMap::new();
        values.insert("ylabel", spec.axis_label().to_string());
        values.insert("coords_a", coords_a.to_string());
        values.insert("coords_b", coords_b.to_string());
        values.insert("legend_a", legends[0].to_string());
        values.insert("legend_b", legends[1].to_string());
        self.template.render(&values)
    }

    /// Render two fields of one series against each other.
    ///
    /// Placeholders: `xlabel`, `ylabel`, `coords`, and `legend` when a non-empty
    /// legend is given. Without one the template must not declare `legend`.
    pub fn render_scatter(
        &self,
        series: &Series,
        x_field: &str,
        y_field: &str,
        legend: Option<&str>,
    ) -> Result<String, RenderError> {
        if series.is_empty() {
            return Err(RenderError::EmptySeries(series.source()));
        }

        let (_, x_spec) = series.field(x_field)?;
        let (_, y_spec) = series.field(y_field)?;
        let coords = series.scatter(x_field, y_field)?;
        debug!("Rendering {} plot: {} points", self.name, coords.len());

        let mut values = BTreeMap::new();
        values.insert("xlabel", x_spec.axis_label().to_string());
        values.insert("ylabel", y_spec.axis_label().to_string());
        values.insert("coords", coords.to_string());
        if let Some(legend) = legend.filter(|l| !l.is_empty()) {
            values.insert("legend", legend.to_string());
        }
        self.template.render(&values)
    }
}
