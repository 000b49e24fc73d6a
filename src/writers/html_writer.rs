use crate::error::Result;
use crate::render::ChartModel;
use crate::settings::TooltipConfig;
use crate::utils::format::{escape_xml, format_coord as n};
use crate::writers::svg_writer::SvgWriter;

/// Wraps the chart in an HTML page with a hover tooltip.
///
/// Tooltip text is computed in Rust and embedded as JSON; the inline script
/// only positions the container and toggles its opacity and the cell outline.
pub struct HtmlWriter<'a> {
    tooltip: &'a TooltipConfig,
}

impl<'a> HtmlWriter<'a> {
    pub fn new(tooltip: &'a TooltipConfig) -> Self {
        Self { tooltip }
    }

    pub fn to_document(&self, model: &ChartModel) -> Result<String> {
        let svg = SvgWriter::new().with_cell_titles(false).to_element(model);

        let lines: Vec<[&str; 3]> = model.cells.iter().map(|c| c.tooltip.lines()).collect();
        // "</" inside a script element would close it early
        let tooltip_data = serde_json::to_string(&lines)?.replace("</", "<\\/");

        let initial = &model.tooltip;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ font-family: sans-serif; margin: 20px; }}
  #tooltip {{
    position: absolute;
    pointer-events: none;
    padding: 6px 10px;
    background: #222;
    color: #fff;
    border-radius: 4px;
    font-size: 12px;
    line-height: 1.4;
    transition: opacity 0.1s;
  }}
</style>
</head>
<body>
<h1 id="heading">{title}</h1>
<p id="subheading">{description}</p>
{svg}<div id="tooltip" style="opacity: {opacity}; left: {left}px; top: {top}px;"></div>
<script type="application/json" id="tooltip-data">{tooltip_data}</script>
<script>
(function () {{
  var lines = JSON.parse(document.getElementById('tooltip-data').textContent);
  var tooltip = document.getElementById('tooltip');
  document.querySelectorAll('#cells rect.cell').forEach(function (cell) {{
    var index = Number(cell.getAttribute('data-index'));
    cell.addEventListener('mouseenter', function (event) {{
      tooltip.replaceChildren.apply(tooltip, lines[index].map(function (line) {{
        var div = document.createElement('div');
        div.textContent = line;
        return div;
      }}));
      tooltip.style.left = (event.pageX + {offset_x}) + 'px';
      tooltip.style.top = (event.pageY + {offset_y}) + 'px';
      tooltip.style.opacity = {visible_opacity};
      cell.setAttribute('stroke', '{outline_color}');
      cell.setAttribute('stroke-width', '{outline_width}');
    }});
    cell.addEventListener('mouseleave', function () {{
      cell.removeAttribute('stroke');
      cell.removeAttribute('stroke-width');
      tooltip.style.opacity = 0;
    }});
  }});
}})();
</script>
</body>
</html>
"#,
            title = escape_xml(&model.title),
            description = escape_xml(&model.description),
            svg = svg,
            opacity = initial.opacity,
            left = n(initial.left),
            top = n(initial.top),
            tooltip_data = tooltip_data,
            offset_x = self.tooltip.offset_x,
            offset_y = self.tooltip.offset_y,
            visible_opacity = self.tooltip.opacity,
            outline_color = escape_xml(&self.tooltip.outline_color),
            outline_width = self.tooltip.outline_width,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, RawSample, Sample};
    use crate::render::HeatmapRenderer;
    use crate::settings::ChartConfig;

    fn model(config: &ChartConfig) -> ChartModel {
        let samples = vec![Sample::from_raw(
            RawSample {
                year: 1753,
                month: 1,
                variance: -6.976,
            },
            8.66,
        )
        .unwrap()];
        let dataset = Dataset {
            base_temperature: 8.66,
            samples,
        };
        HeatmapRenderer::new(config).render(&dataset).unwrap()
    }

    #[test]
    fn test_page_mounts_hidden_tooltip() {
        let config = ChartConfig::default();
        let html = HtmlWriter::new(&config.tooltip)
            .to_document(&model(&config))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div id="tooltip" style="opacity: 0; left: 0px; top: 0px;"></div>"#));
        assert!(html.contains("<svg xmlns="));
        assert!(!html.contains("<?xml"));
    }

    #[test]
    fn test_page_embeds_tooltip_lines_and_behaviour() {
        let config = ChartConfig::default();
        let html = HtmlWriter::new(&config.tooltip)
            .to_document(&model(&config))
            .unwrap();

        assert!(html.contains(r#"[["1753 - January","1.68℃","-6.976℃"]]"#));
        assert!(html.contains("tooltip.style.opacity = 0.95;"));
        assert!(html.contains("event.pageX + 10"));
        assert!(html.contains("event.pageY + -100"));
        assert!(html.contains("cell.setAttribute('stroke', 'black');"));
        assert!(html.contains("cell.setAttribute('stroke-width', '2');"));
    }
}
