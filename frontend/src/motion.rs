//! Scroll-linked visual parameters for the animated regions of the home page.
//!
//! Every region is described by a [`Motion`] row in [`Region::motion`]. The row is data,
//! `Motion::apply` is the only place the interpolation happens.

use yew::prelude::*;

use crate::scroll::{use_scroll_offset, ScrollOffset};
use crate::viewport::use_viewport;

pub const HERO_FADE_DISTANCE_PX: f64 = 600.0;
pub const HERO_PARALLAX: f64 = 0.5;
pub const IMAGE_SCALE_RATE: f64 = 0.0001;
pub const CAPTION_FADE_START_PX: f64 = 800.0;
pub const CAPTION_FADE_DISTANCE_PX: f64 = 400.0;
pub const VEHICLE_REVEAL_PX: f64 = 1200.0;
pub const COMFORT_REVEAL_PX: f64 = 1800.0;
pub const TECH_PARALLAX: f64 = 0.3;
pub const TECH_HEADING_REVEAL_PX: f64 = 2400.0;
pub const TECH_CARDS_REVEAL_PX: f64 = 2600.0;
pub const TECH_CARD_STAGGER_PX: f64 = 100.0;
pub const REVEAL_DURATION_PX: f64 = 300.0;
pub const COLUMN_SLIDE_PX: f64 = 50.0;
pub const CARD_RISE_PX: f64 = 30.0;

pub const TECH_CARD_COUNT: usize = 3;

/// Opacity and transform of one region for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Visual {
    pub const RESTING: Visual = Visual {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Inline CSS for the region's wrapper element.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate3d({:.2}px, {:.2}px, 0) scale({:.5});",
            self.opacity, self.translate_x, self.translate_y, self.scale
        )
    }
}

fn ratio(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fade {
    Static,
    /// Fully visible until `start`, invisible from `start + distance` on.
    Out { start: f64, distance: f64 },
    /// Invisible until `start`, fully visible from `start + duration` on.
    In { start: f64, duration: f64 },
}

impl Fade {
    fn opacity(&self, offset: f64) -> f64 {
        match *self {
            Fade::Static => 1.0,
            Fade::Out { start, distance } => ratio(1.0 - (offset - start) / distance),
            Fade::In { start, duration } => ratio((offset - start) / duration),
        }
    }

    // Slides share the fade-in window; anything else sits at rest.
    fn reveal_progress(&self, offset: f64) -> f64 {
        match *self {
            Fade::In { start, duration } => ratio((offset - start) / duration),
            _ => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slide {
    pub axis: Axis,
    /// Offset in px at the start of the reveal window. Negative enters from the left/top.
    pub from: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub fade: Fade,
    pub slide: Option<Slide>,
    /// Vertical translation per scrolled px.
    pub parallax: Option<f64>,
    /// Scale growth per scrolled px.
    pub scale_rate: Option<f64>,
}

impl Motion {
    pub const fn still() -> Self {
        Motion {
            fade: Fade::Static,
            slide: None,
            parallax: None,
            scale_rate: None,
        }
    }

    pub const fn fade_out(start: f64, distance: f64) -> Self {
        Motion {
            fade: Fade::Out { start, distance },
            ..Motion::still()
        }
    }

    pub const fn reveal(start: f64, duration: f64) -> Self {
        Motion {
            fade: Fade::In { start, duration },
            ..Motion::still()
        }
    }

    pub const fn sliding(self, axis: Axis, from: f64) -> Self {
        Motion {
            slide: Some(Slide { axis, from }),
            ..self
        }
    }

    pub const fn with_parallax(self, factor: f64) -> Self {
        Motion {
            parallax: Some(factor),
            ..self
        }
    }

    pub const fn scaling(self, rate: f64) -> Self {
        Motion {
            scale_rate: Some(rate),
            ..self
        }
    }

    /// Delays the reveal window of sibling `index` by `index * delay` px.
    pub fn staggered(self, index: usize, delay: f64) -> Self {
        let shift = index as f64 * delay;
        let fade = match self.fade {
            Fade::In { start, duration } => Fade::In {
                start: start + shift,
                duration,
            },
            Fade::Out { start, distance } => Fade::Out {
                start: start + shift,
                distance,
            },
            Fade::Static => Fade::Static,
        };
        Motion { fade, ..self }
    }

    #[cfg(test)]
    pub fn reveal_start(&self) -> Option<f64> {
        match self.fade {
            Fade::In { start, .. } => Some(start),
            _ => None,
        }
    }

    pub fn apply(&self, offset: f64, reduced_motion: bool) -> Visual {
        if reduced_motion {
            return Visual::RESTING;
        }
        let offset = offset.max(0.0);

        let mut visual = Visual {
            opacity: self.fade.opacity(offset),
            ..Visual::RESTING
        };
        if let Some(slide) = self.slide {
            let remaining = slide.from * (1.0 - self.fade.reveal_progress(offset));
            match slide.axis {
                Axis::X => visual.translate_x += remaining,
                Axis::Y => visual.translate_y += remaining,
            }
        }
        if let Some(factor) = self.parallax {
            visual.translate_y += offset * factor;
        }
        if let Some(rate) = self.scale_rate {
            visual.scale = 1.0 + offset * rate;
        }
        visual
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    HeroText,
    HeroImage,
    PurposeCaption,
    VehicleText,
    VehicleImage,
    ComfortVideo,
    ComfortText,
    TechBackground,
    TechHeading,
    TechCard(usize),
}

impl Region {
    #[cfg(test)]
    pub const ALL: [Region; 12] = [
        Region::HeroText,
        Region::HeroImage,
        Region::PurposeCaption,
        Region::VehicleText,
        Region::VehicleImage,
        Region::ComfortVideo,
        Region::ComfortText,
        Region::TechBackground,
        Region::TechHeading,
        Region::TechCard(0),
        Region::TechCard(1),
        Region::TechCard(2),
    ];

    pub fn motion(self) -> Motion {
        match self {
            Region::HeroText => {
                Motion::fade_out(0.0, HERO_FADE_DISTANCE_PX).with_parallax(HERO_PARALLAX)
            }
            Region::HeroImage => Motion::still().scaling(IMAGE_SCALE_RATE),
            Region::PurposeCaption => {
                Motion::fade_out(CAPTION_FADE_START_PX, CAPTION_FADE_DISTANCE_PX)
            }
            Region::VehicleText => Motion::reveal(VEHICLE_REVEAL_PX, REVEAL_DURATION_PX)
                .sliding(Axis::X, -COLUMN_SLIDE_PX),
            Region::VehicleImage => Motion::reveal(VEHICLE_REVEAL_PX, REVEAL_DURATION_PX)
                .sliding(Axis::X, COLUMN_SLIDE_PX),
            Region::ComfortVideo => Motion::reveal(COMFORT_REVEAL_PX, REVEAL_DURATION_PX)
                .sliding(Axis::X, -COLUMN_SLIDE_PX),
            Region::ComfortText => Motion::reveal(COMFORT_REVEAL_PX, REVEAL_DURATION_PX)
                .sliding(Axis::X, COLUMN_SLIDE_PX),
            Region::TechBackground => Motion::still().with_parallax(TECH_PARALLAX),
            Region::TechHeading => Motion::reveal(TECH_HEADING_REVEAL_PX, REVEAL_DURATION_PX),
            Region::TechCard(index) => Motion::reveal(TECH_CARDS_REVEAL_PX, REVEAL_DURATION_PX)
                .sliding(Axis::Y, CARD_RISE_PX)
                .staggered(index, TECH_CARD_STAGGER_PX),
        }
    }
}

/// Everything the mapper needs for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub offset: ScrollOffset,
    pub reduced_motion: bool,
}

impl Frame {
    pub fn visual(&self, region: Region) -> Visual {
        region.motion().apply(self.offset.px(), self.reduced_motion)
    }

    pub fn style(&self, region: Region) -> String {
        self.visual(region).style()
    }
}

#[hook]
pub fn use_frame() -> Frame {
    let offset = use_scroll_offset();
    let viewport = use_viewport();
    Frame {
        offset,
        reduced_motion: viewport.reduced_motion(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::ViewportClass;

    const EPS: f64 = 1e-9;

    fn offsets() -> impl Iterator<Item = f64> {
        (0..=6000).step_by(5).map(f64::from)
    }

    fn at(region: Region, offset: f64) -> Visual {
        region.motion().apply(offset, false)
    }

    #[test]
    fn hero_fades_out_over_first_600px() {
        assert_eq!(at(Region::HeroText, 0.0).opacity, 1.0);
        assert!((at(Region::HeroText, 300.0).opacity - 0.5).abs() < EPS);
        for s in offsets() {
            let expected = (1.0 - s / HERO_FADE_DISTANCE_PX).clamp(0.0, 1.0);
            assert!((at(Region::HeroText, s).opacity - expected).abs() < EPS, "s = {}", s);
            if s >= HERO_FADE_DISTANCE_PX {
                assert_eq!(at(Region::HeroText, s).opacity, 0.0);
            }
        }
    }

    #[test]
    fn hero_text_drifts_at_half_speed() {
        assert_eq!(at(Region::HeroText, 400.0).translate_y, 200.0);
        assert_eq!(at(Region::HeroText, 400.0).translate_x, 0.0);
    }

    #[test]
    fn caption_holds_until_its_fade_start() {
        assert_eq!(at(Region::PurposeCaption, 0.0).opacity, 1.0);
        assert_eq!(at(Region::PurposeCaption, 800.0).opacity, 1.0);
        assert!((at(Region::PurposeCaption, 1000.0).opacity - 0.5).abs() < EPS);
        assert_eq!(at(Region::PurposeCaption, 1200.0).opacity, 0.0);
    }

    #[test]
    fn reveals_are_clamped_and_monotonic() {
        for region in Region::ALL {
            let motion = region.motion();
            let Fade::In { start, duration } = motion.fade else {
                continue;
            };
            let mut previous = 0.0;
            for s in offsets() {
                let opacity = motion.apply(s, false).opacity;
                if s <= start {
                    assert_eq!(opacity, 0.0, "{:?} at {}", region, s);
                }
                if s >= start + duration {
                    assert_eq!(opacity, 1.0, "{:?} at {}", region, s);
                }
                assert!(opacity >= previous, "{:?} regressed at {}", region, s);
                assert!((0.0..=1.0).contains(&opacity));
                previous = opacity;
            }
        }
    }

    #[test]
    fn two_column_reveal_converges() {
        let text = at(Region::VehicleText, VEHICLE_REVEAL_PX);
        let image = at(Region::VehicleImage, VEHICLE_REVEAL_PX);
        assert_eq!(text.translate_x, -COLUMN_SLIDE_PX);
        assert_eq!(image.translate_x, COLUMN_SLIDE_PX);

        let halfway = VEHICLE_REVEAL_PX + REVEAL_DURATION_PX / 2.0;
        assert!((at(Region::VehicleText, halfway).translate_x + 25.0).abs() < EPS);
        assert!((at(Region::VehicleImage, halfway).translate_x - 25.0).abs() < EPS);

        let done = VEHICLE_REVEAL_PX + REVEAL_DURATION_PX;
        assert_eq!(at(Region::VehicleText, done).translate_x, 0.0);
        assert_eq!(at(Region::VehicleImage, done).translate_x, 0.0);

        assert!(at(Region::ComfortVideo, COMFORT_REVEAL_PX).translate_x < 0.0);
        assert!(at(Region::ComfortText, COMFORT_REVEAL_PX).translate_x > 0.0);
    }

    #[test]
    fn tech_cards_reveal_in_sequence() {
        let first = Region::TechCard(0).motion().reveal_start().unwrap();
        for index in 1..TECH_CARD_COUNT {
            let start = Region::TechCard(index).motion().reveal_start().unwrap();
            assert_eq!(start, first + index as f64 * TECH_CARD_STAGGER_PX);
        }

        let fully_visible_at = |index: usize| {
            offsets()
                .find(|&s| at(Region::TechCard(index), s).opacity >= 1.0)
                .unwrap()
        };
        for index in 1..TECH_CARD_COUNT {
            assert!(fully_visible_at(index) >= fully_visible_at(index - 1));
        }
    }

    #[test]
    fn tech_cards_rise_from_below() {
        assert_eq!(at(Region::TechCard(0), 0.0).translate_y, CARD_RISE_PX);
        assert_eq!(at(Region::TechCard(2), 3500.0).translate_y, 0.0);
    }

    #[test]
    fn parallax_and_scale_follow_the_offset() {
        assert!((at(Region::TechBackground, 1000.0).translate_y - 300.0).abs() < EPS);
        assert_eq!(at(Region::TechBackground, 1000.0).opacity, 1.0);
        assert!((at(Region::HeroImage, 1000.0).scale - 1.1).abs() < EPS);
        assert_eq!(at(Region::HeroImage, 0.0).scale, 1.0);
    }

    #[test]
    fn reduced_motion_is_always_resting() {
        for region in Region::ALL {
            for s in offsets() {
                assert_eq!(region.motion().apply(s, true), Visual::RESTING, "{:?}", region);
            }
        }
    }

    #[test]
    fn skipping_straight_to_the_bottom_settles_every_reveal() {
        for region in Region::ALL {
            let motion = region.motion();
            if motion.reveal_start().is_none() {
                continue;
            }
            let visual = motion.apply(5000.0, false);
            assert_eq!(visual.opacity, 1.0, "{:?}", region);
            assert_eq!(visual.translate_x, 0.0, "{:?}", region);
            assert_eq!(visual.translate_y, 0.0, "{:?}", region);
        }
    }

    #[test]
    fn narrowing_the_viewport_collapses_the_next_frame() {
        let offset = ScrollOffset(1300);
        let wide = Frame {
            offset,
            reduced_motion: ViewportClass::classify(1200.0, false).reduced_motion(),
        };
        assert_ne!(wide.visual(Region::VehicleText), Visual::RESTING);

        let narrow = Frame {
            offset,
            reduced_motion: ViewportClass::classify(400.0, false).reduced_motion(),
        };
        for region in Region::ALL {
            assert_eq!(narrow.visual(region), Visual::RESTING);
        }
    }

    #[test]
    fn negative_offsets_behave_like_the_top_of_the_page() {
        for region in Region::ALL {
            assert_eq!(at(region, -120.0), at(region, 0.0));
        }
    }

    #[test]
    fn style_renders_all_four_channels() {
        let style = Visual {
            opacity: 0.5,
            translate_x: -25.0,
            translate_y: 10.0,
            scale: 1.05,
        }
        .style();
        assert_eq!(
            style,
            "opacity: 0.500; transform: translate3d(-25.00px, 10.00px, 0) scale(1.05000);"
        );
    }
}
