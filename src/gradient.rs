use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    pub from: Rgb,
    pub to: Rgb,
}

impl GradientStop {
    pub fn new(from: Rgb, to: Rgb) -> GradientStop {
        GradientStop { from, to }
    }

    pub fn at(&self, progress: f64) -> Rgb {
        self.from.lerp(self.to, progress)
    }
}

/// Three named stops, each blended independently by scroll progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollGradient {
    pub angle_deg: f32,
    pub start: GradientStop,
    pub middle: GradientStop,
    pub end: GradientStop,
}

impl ScrollGradient {
    pub fn colors_at(&self, progress: f64) -> [Rgb; 3] {
        [self.start.at(progress), self.middle.at(progress), self.end.at(progress)]
    }

    pub fn css_at(&self, progress: f64) -> String {
        let [start, middle, end] = self.colors_at(progress);
        format!(
            "linear-gradient({}deg, {} 0%, {} 50%, {} 100%)",
            self.angle_deg, start, middle, end
        )
    }
}

/// Samples a three-stop gradient laid out at 0%, 50% and 100%.
pub fn color_at(colors: &[Rgb; 3], t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0) as f64;
    if t <= 0.5 {
        colors[0].lerp(colors[1], t * 2.0)
    } else {
        colors[1].lerp(colors[2], (t - 0.5) * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gradient() -> ScrollGradient {
        ScrollGradient {
            angle_deg: 135.0,
            start: GradientStop::new(Rgb::new(0, 0, 0), Rgb::new(200, 0, 0)),
            middle: GradientStop::new(Rgb::new(0, 100, 0), Rgb::new(0, 0, 0)),
            end: GradientStop::new(Rgb::new(10, 10, 10), Rgb::new(10, 10, 10)),
        }
    }

    #[test]
    fn stops_blend_independently() {
        assert_eq!(
            gradient().colors_at(0.5),
            [Rgb::new(100, 0, 0), Rgb::new(0, 50, 0), Rgb::new(10, 10, 10)]
        );
    }

    #[test]
    fn css_uses_fixed_angle_and_positions() {
        assert_eq!(
            gradient().css_at(0.0),
            "linear-gradient(135deg, rgb(0, 0, 0) 0%, rgb(0, 100, 0) 50%, rgb(10, 10, 10) 100%)"
        );
    }

    #[test]
    fn samples_between_stops() {
        let colors = [Rgb::new(0, 0, 0), Rgb::new(100, 100, 100), Rgb::new(200, 0, 0)];
        assert_eq!(color_at(&colors, 0.0), colors[0]);
        assert_eq!(color_at(&colors, 0.25), Rgb::new(50, 50, 50));
        assert_eq!(color_at(&colors, 0.5), colors[1]);
        assert_eq!(color_at(&colors, 1.0), colors[2]);
        assert_eq!(color_at(&colors, 7.0), colors[2]);
    }
}
