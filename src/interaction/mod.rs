pub mod tooltip;

pub use tooltip::{
    HoverState, InteractionHandler, Outline, PointerEvent, TooltipContent, TooltipView,
};
