use leptos::prelude::*;

use crate::models::EmotionalArcPoint;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PAD_X: f64 = 48.0;
const PAD_Y: f64 = 28.0;

/// Largest absolute intensity in the arc, floored at the service's nominal
/// -10..10 range so a flat arc doesn't fill the whole plot.
fn intensity_scale(points: &[EmotionalArcPoint]) -> f64 {
    points
        .iter()
        .map(|p| p.intensity.abs())
        .fold(10.0, f64::max)
}

fn x_at(index: usize, count: usize) -> f64 {
    if count <= 1 {
        WIDTH / 2.0
    } else {
        PAD_X + (WIDTH - 2.0 * PAD_X) * index as f64 / (count - 1) as f64
    }
}

fn y_at(intensity: f64, scale: f64) -> f64 {
    HEIGHT / 2.0 - intensity / scale * (HEIGHT / 2.0 - PAD_Y)
}

/// Line chart of emotional intensity across the story's beats, in input
/// order, with a dashed baseline at zero.
#[component]
pub fn EmotionalArcChart(data: Vec<EmotionalArcPoint>) -> impl IntoView {
    let count = data.len();
    let scale = intensity_scale(&data);

    let polyline: String = data
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i, count), y_at(p.intensity, scale)))
        .collect::<Vec<_>>()
        .join(" ");

    let dots = data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = x_at(i, count);
            let y = y_at(p.intensity, scale);
            view! {
                <circle cx=x cy=y r="4" fill="#6366f1" stroke="#e2e8f0" stroke-width="1" />
            }
        })
        .collect_view();

    let label_y = HEIGHT - 6.0;
    let labels = data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = x_at(i, count);
            view! {
                <text
                    x=x
                    y=label_y
                    text-anchor="middle"
                    font-size="10"
                    fill="#94a3b8"
                >
                    {p.point.clone()}
                </text>
            }
        })
        .collect_view();

    let baseline = HEIGHT / 2.0;
    let baseline_end = WIDTH - PAD_X;
    let axis_label_x = PAD_X - 10.0;

    view! {
        <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) class="w-full h-auto">
            // Zero baseline
            <line
                x1=PAD_X
                y1=baseline
                x2=baseline_end
                y2=baseline
                stroke="#475569"
                stroke-width="1"
                stroke-dasharray="3 3"
            />
            <text
                x=axis_label_x
                y=baseline
                text-anchor="end"
                dominant-baseline="middle"
                font-size="10"
                fill="#64748b"
            >
                "0"
            </text>

            <polyline
                points=polyline
                fill="none"
                stroke="#6366f1"
                stroke-width="2"
                stroke-linejoin="round"
            />

            {dots}
            {labels}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(intensities: &[f64]) -> Vec<EmotionalArcPoint> {
        intensities
            .iter()
            .enumerate()
            .map(|(i, &intensity)| EmotionalArcPoint {
                point: format!("Beat {}", i + 1),
                intensity,
            })
            .collect()
    }

    #[test]
    fn points_span_the_padded_width_in_order() {
        assert_eq!(x_at(0, 5), PAD_X);
        assert_eq!(x_at(4, 5), WIDTH - PAD_X);
        assert!(x_at(1, 5) < x_at(2, 5));
    }

    #[test]
    fn single_point_is_centered() {
        assert_eq!(x_at(0, 1), WIDTH / 2.0);
    }

    #[test]
    fn zero_intensity_sits_on_the_baseline() {
        assert_eq!(y_at(0.0, 10.0), HEIGHT / 2.0);
    }

    #[test]
    fn extremes_reach_the_padded_edges() {
        assert_eq!(y_at(10.0, 10.0), PAD_Y);
        assert_eq!(y_at(-10.0, 10.0), HEIGHT - PAD_Y);
    }

    #[test]
    fn scale_is_floored_at_the_nominal_range() {
        assert_eq!(intensity_scale(&arc(&[1.0, -2.0, 3.0])), 10.0);
    }

    #[test]
    fn scale_grows_with_out_of_range_intensities() {
        assert_eq!(intensity_scale(&arc(&[4.0, -16.0])), 16.0);
    }
}
