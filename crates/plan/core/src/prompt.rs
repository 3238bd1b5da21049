//! Review summary and image-prompt rendering.
//!
//! The summary echoes what the user entered. The prompt describes the plan
//! with the road as the bottom edge of the image, so every zone placement is
//! rotated first.

use crate::plan::{PlotSpec, Zone};
use crate::rotation::Sentinel;

/// Review list shown before generating, with placements as entered.
pub fn summary_lines(spec: &PlotSpec) -> Vec<String> {
    let zones = &spec.zones;
    vec![
        format!(
            "Plot: {} FT x {} FT",
            spec.dimensions.width_ft, spec.dimensions.length_ft
        ),
        format!("Orientation: {}-facing road", spec.road),
        format!(
            "Structure: {}",
            if spec.vastu { "Vastu Compliant" } else { "Standard" }
        ),
        format!("{}: {}", Zone::Kitchen.label(), zones.kitchen),
        format!("{}: {}", Zone::Bedroom.label(), zones.bedroom),
        format!("{}: {}", Zone::Bath.label(), zones.bath),
        format!("{}: {}", Zone::Stairs.label(), zones.stairs),
    ]
}

/// Builds the blueprint-style prompt for an image model.
#[derive(Clone, Debug)]
pub struct PromptBuilder<'a> {
    spec: &'a PlotSpec,
}

impl<'a> PromptBuilder<'a> {
    pub const fn new(spec: &'a PlotSpec) -> Self {
        Self { spec }
    }

    pub fn build(&self) -> String {
        let spec = self.spec;
        let rotated = spec.rotated_zones();
        let mut p = String::with_capacity(1024);

        p.push_str(
            "Technical architectural 2D ground floor plan, top-down flat view, \
             blueprint style with black lines on a white background. ",
        );
        p.push_str(&format!(
            "The plot is a vertical rectangle with dimensions labeled '{} FT WIDTH' at the bottom \
             and '{} FT LENGTH' along the side. ",
            spec.dimensions.width_ft, spec.dimensions.length_ft
        ));
        p.push_str("The bottom edge of the image is the road. ");

        if spec.vastu {
            p.push_str("The layout is fully Vastu Shastra compliant. ");
        }

        p.push_str(&format!(
            "In the {} zone there is an open 'CAR PARKING' bay. ",
            rotated.parking
        ));
        p.push_str(
            "Adjacent to the parking, near the center-bottom, is the 'MAIN ENTRANCE' \
             leading into a central 'LIVING HALL'. ",
        );
        p.push_str(&format!(
            "The {} zone contains the 'KITCHEN' with an L-shaped counter. ",
            rotated.kitchen
        ));
        p.push_str(&format!(
            "The {} zone is the 'MASTER BEDROOM' with a bed icon. ",
            rotated.bedroom
        ));

        if spec.zones.bath.parse::<Sentinel>() == Ok(Sentinel::Attached) {
            p.push_str(
                "The 'BATHROOM' and 'TOILET (WC)' are attached to the Master Bedroom. ",
            );
        } else {
            p.push_str(&format!(
                "The {} zone features two distinctly separate, small rooms labeled \
                 'TOILET (WC)' and 'BATHROOM'. ",
                rotated.bath
            ));
        }

        p.push_str(&format!(
            "A 'STAIRCASE' is located along the {} ascending upwards. ",
            rotated.stairs
        ));
        p.push_str(
            "The center of the plan (Brahmasthan) is kept open as part of the living hall. \
             Room labels are clear uppercase text. Basic furniture icons included.",
        );

        p
    }
}

pub fn render_prompt(spec: &PlotSpec) -> String {
    PromptBuilder::new(spec).build()
}
