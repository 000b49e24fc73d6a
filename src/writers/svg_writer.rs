use crate::render::{CellView, ChartModel, LegendView};
use crate::scales::{Axis, AxisOrientation};
use crate::utils::format::{escape_xml, format_coord as n};

/// Serializes a `ChartModel` into SVG markup
pub struct SvgWriter {
    cell_titles: bool,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self { cell_titles: true }
    }

    /// Native `<title>` tooltips on every cell; disable when a script drives the tooltip
    pub fn with_cell_titles(mut self, cell_titles: bool) -> Self {
        self.cell_titles = cell_titles;
        self
    }

    /// Standalone SVG document
    pub fn to_document(&self, model: &ChartModel) -> String {
        let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&self.to_element(model));
        svg
    }

    /// `<svg>` element suitable for inlining into HTML
    pub fn to_element(&self, model: &ChartModel) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" id="heatmap" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="10">
  <title id="title">{}</title>
  <desc id="description">{}</desc>
  <rect width="100%" height="100%" fill="white"/>
"#,
            escape_xml(&model.title),
            escape_xml(&model.description),
            w = n(model.width),
            h = n(model.height),
        );

        svg.push_str("  <g id=\"cells\">\n");
        for (index, cell) in model.cells.iter().enumerate() {
            self.write_cell(&mut svg, index, cell);
        }
        svg.push_str("  </g>\n");

        write_axis(&mut svg, &model.x_axis);
        write_axis(&mut svg, &model.y_axis);
        write_legend(&mut svg, &model.legend);

        svg.push_str("</svg>\n");
        svg
    }

    fn write_cell(&self, svg: &mut String, index: usize, cell: &CellView) {
        svg.push_str(&format!(
            r#"    <rect class="cell" data-index="{}" x="{}" y="{}" width="{}" height="{}" fill="{}" data-month="{}" data-year="{}" data-temp="{}""#,
            index,
            n(cell.x),
            n(cell.y),
            n(cell.width),
            n(cell.height),
            escape_xml(&cell.fill),
            cell.month,
            cell.year,
            cell.temp
        ));

        if self.cell_titles {
            svg.push_str(&format!(
                "><title>{}</title></rect>\n",
                escape_xml(&cell.tooltip.to_text())
            ));
        } else {
            svg.push_str("/>\n");
        }
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_axis(svg: &mut String, axis: &Axis) {
    let (r0, r1) = axis.range;
    let size = axis.tick_size;
    let offset = axis.tick_size + axis.tick_padding;

    svg.push_str(&format!(
        "  <g id=\"{}\" class=\"axis\" transform=\"translate({},{})\" fill=\"none\" text-anchor=\"{}\">\n",
        axis.id,
        n(axis.translate.0),
        n(axis.translate.1),
        match axis.orientation {
            AxisOrientation::Bottom => "middle",
            AxisOrientation::Left => "end",
        }
    ));

    match axis.orientation {
        AxisOrientation::Bottom => {
            svg.push_str(&format!(
                "    <path class=\"domain\" stroke=\"currentColor\" d=\"M{},{}V0H{}V{}\"/>\n",
                n(r0),
                n(size),
                n(r1),
                n(size)
            ));
            for tick in &axis.ticks {
                svg.push_str(&format!(
                    "    <g class=\"tick\" transform=\"translate({},0)\"><line stroke=\"currentColor\" y2=\"{}\"/><text fill=\"currentColor\" y=\"{}\" dy=\"0.71em\">{}</text></g>\n",
                    n(tick.position),
                    n(size),
                    n(offset),
                    escape_xml(&tick.label)
                ));
            }
        }
        AxisOrientation::Left => {
            svg.push_str(&format!(
                "    <path class=\"domain\" stroke=\"currentColor\" d=\"M{},{}H0V{}H{}\"/>\n",
                n(-size),
                n(r0),
                n(r1),
                n(-size)
            ));
            for tick in &axis.ticks {
                svg.push_str(&format!(
                    "    <g class=\"tick\" transform=\"translate(0,{})\"><line stroke=\"currentColor\" x2=\"{}\"/><text fill=\"currentColor\" x=\"{}\" dy=\"0.32em\">{}</text></g>\n",
                    n(tick.position),
                    n(-size),
                    n(-offset),
                    escape_xml(&tick.label)
                ));
            }
        }
    }

    svg.push_str("  </g>\n");
}

fn write_legend(svg: &mut String, legend: &LegendView) {
    svg.push_str("  <g id=\"legend\">\n");
    for entry in &legend.entries {
        svg.push_str(&format!(
            "    <rect class=\"swatch\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"#ccc\" stroke-width=\"0.5\"/>\n",
            n(entry.x),
            n(legend.swatch_y),
            n(legend.swatch_width),
            n(legend.swatch_height),
            escape_xml(&entry.color)
        ));
        svg.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\">{}</text>\n",
            n(entry.x + legend.swatch_width / 2.0),
            n(legend.label_y),
            escape_xml(&entry.label)
        ));
    }
    svg.push_str("  </g>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, RawSample, Sample};
    use crate::render::HeatmapRenderer;
    use crate::settings::ChartConfig;

    fn model() -> ChartModel {
        let samples = [(1753, 1, -6.976), (2015, 12, 1.0)]
            .into_iter()
            .map(|(year, month, variance)| {
                Sample::from_raw(RawSample { year, month, variance }, 8.66).unwrap()
            })
            .collect();
        let dataset = Dataset {
            base_temperature: 8.66,
            samples,
        };
        HeatmapRenderer::new(&ChartConfig::default())
            .render(&dataset)
            .unwrap()
    }

    #[test]
    fn test_document_structure() {
        let svg = SvgWriter::new().to_document(&model());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="1500" height="560""#));
        assert_eq!(svg.matches("class=\"cell\"").count(), 2);
        assert_eq!(svg.matches("class=\"swatch\"").count(), 10);
        assert!(svg.contains(r#"<g id="x-axis" class="axis" transform="translate(0,472)""#));
        assert!(svg.contains(r#"<g id="y-axis" class="axis" transform="translate(80,0)""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_cell_attributes() {
        let svg = SvgWriter::new().to_document(&model());

        assert!(svg.contains(
            r##"x="80" y="16" width="6" height="38" fill="#313695" data-month="1" data-year="1753""##
        ));
        assert!(svg.contains("<title>1753 - January\n1.68℃\n-6.976℃</title>"));
    }

    #[test]
    fn test_cells_without_titles() {
        let svg = SvgWriter::new().with_cell_titles(false).to_element(&model());
        assert!(!svg.contains("<title>1753"));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_axis_labels() {
        let svg = SvgWriter::new().to_element(&model());
        assert!(svg.contains(">1760</text>"));
        assert!(svg.contains(">January</text>"));
        assert!(svg.contains(">December</text>"));
        assert!(svg.contains(">5.0</text>"));
    }
}
