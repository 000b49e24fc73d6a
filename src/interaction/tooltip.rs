use serde::Serialize;

use crate::models::Sample;
use crate::settings::TooltipConfig;
use crate::utils::constants::CELSIUS;

/// Pointer position in page coordinates, passed explicitly to every handler call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// The three tooltip lines for one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub heading: String,
    pub temperature: String,
    pub variance: String,
}

impl TooltipContent {
    pub fn for_sample(sample: &Sample) -> Self {
        Self {
            heading: format!("{} - {}", sample.year, sample.month_name),
            temperature: format!("{:.2}{}", sample.abs, CELSIUS),
            variance: format!("{}{}", sample.variance, CELSIUS),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [
            self.heading.as_str(),
            self.temperature.as_str(),
            self.variance.as_str(),
        ]
    }

    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outline {
    pub color: String,
    pub width: f64,
}

/// Everything a presentation layer needs to draw the tooltip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipView {
    pub opacity: f64,
    pub left: f64,
    pub top: f64,
    pub content: Option<TooltipContent>,
}

impl TooltipView {
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            left: 0.0,
            top: 0.0,
            content: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovered { cell: usize },
}

/// Hover state machine shared by all cells of one chart
pub struct InteractionHandler {
    config: TooltipConfig,
    state: HoverState,
    tooltip: TooltipView,
}

impl InteractionHandler {
    pub fn new(config: &TooltipConfig) -> Self {
        Self {
            config: config.clone(),
            state: HoverState::Idle,
            tooltip: TooltipView::hidden(),
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn tooltip(&self) -> &TooltipView {
        &self.tooltip
    }

    /// Show the tooltip for `sample` next to the pointer and outline `cell`
    pub fn pointer_enter(
        &mut self,
        cell: usize,
        sample: &Sample,
        event: PointerEvent,
    ) -> &TooltipView {
        self.state = HoverState::Hovered { cell };
        self.tooltip = TooltipView {
            opacity: self.config.opacity,
            left: event.page_x + self.config.offset_x,
            top: event.page_y + self.config.offset_y,
            content: Some(TooltipContent::for_sample(sample)),
        };
        &self.tooltip
    }

    /// Hide the tooltip if `cell` is the hovered one; content and position are kept
    pub fn pointer_leave(&mut self, cell: usize) -> &TooltipView {
        if self.state == (HoverState::Hovered { cell }) {
            self.state = HoverState::Idle;
            self.tooltip.opacity = 0.0;
        }
        &self.tooltip
    }

    /// Outline currently drawn around `cell`, if any
    pub fn outline(&self, cell: usize) -> Option<Outline> {
        match self.state {
            HoverState::Hovered { cell: hovered } if hovered == cell => Some(Outline {
                color: self.config.outline_color.clone(),
                width: self.config.outline_width,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawSample;

    fn sample() -> Sample {
        Sample::from_raw(
            RawSample {
                year: 1753,
                month: 1,
                variance: -6.976,
            },
            8.66,
        )
        .unwrap()
    }

    #[test]
    fn test_tooltip_content() {
        let content = TooltipContent::for_sample(&sample());
        assert_eq!(content.heading, "1753 - January");
        assert_eq!(content.temperature, "1.68℃");
        assert_eq!(content.variance, "-6.976℃");
        assert_eq!(content.to_text(), "1753 - January\n1.68℃\n-6.976℃");
    }

    #[test]
    fn test_enter_then_leave() {
        let mut handler = InteractionHandler::new(&TooltipConfig::default());
        assert_eq!(handler.state(), HoverState::Idle);
        assert!(!handler.tooltip().is_visible());

        let view = handler
            .pointer_enter(3, &sample(), PointerEvent::new(200.0, 300.0))
            .clone();
        assert_eq!(view.opacity, 0.95);
        assert_eq!(view.left, 210.0);
        assert_eq!(view.top, 200.0);
        assert_eq!(view.content.as_ref().unwrap().heading, "1753 - January");
        assert_eq!(handler.state(), HoverState::Hovered { cell: 3 });
        assert_eq!(
            handler.outline(3),
            Some(Outline {
                color: "black".to_string(),
                width: 2.0
            })
        );
        assert_eq!(handler.outline(4), None);

        let view = handler.pointer_leave(3);
        assert_eq!(view.opacity, 0.0);
        assert!(view.content.is_some());
        assert_eq!(handler.state(), HoverState::Idle);
        assert_eq!(handler.outline(3), None);
    }

    #[test]
    fn test_entering_another_cell_moves_hover() {
        let mut handler = InteractionHandler::new(&TooltipConfig::default());
        handler.pointer_enter(1, &sample(), PointerEvent::new(0.0, 0.0));
        handler.pointer_enter(2, &sample(), PointerEvent::new(5.0, 5.0));

        assert_eq!(handler.outline(1), None);
        assert!(handler.outline(2).is_some());

        // A stale leave from the first cell must not hide the tooltip
        handler.pointer_leave(1);
        assert!(handler.tooltip().is_visible());
    }
}
