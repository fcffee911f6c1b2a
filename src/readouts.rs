use crate::core::{Axis, Dimensions};
use crate::diagram::format_dimension;
use web_sys as web;

/// Show `value` next to its slider, one decimal place.
#[inline]
pub fn set(document: &web::Document, axis: Axis, value: f32) {
    if let Some(el) = document.get_element_by_id(axis.readout_id()) {
        el.set_text_content(Some(&format_dimension(value)));
    }
}

pub fn set_all(document: &web::Document, dims: &Dimensions) {
    for axis in Axis::ALL {
        set(document, axis, dims.get(axis));
    }
}

/// Move a slider thumb to a value the viewer clamped.
pub fn sync_slider(input: &web::HtmlInputElement, value: f32) {
    let shown = input.value().trim().parse::<f32>().ok();
    if shown != Some(value) {
        input.set_value(&value.to_string());
    }
}
