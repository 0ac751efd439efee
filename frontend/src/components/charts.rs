use shared::Label;
use yew::prelude::*;

pub const REAL_COLOR: &str = "#4caf50";
pub const FAKE_COLOR: &str = "#f44336";
pub const BAR_COLOR: &str = "#2196f3";

pub fn label_color(label: Label) -> &'static str {
    match label {
        Label::Real => REAL_COLOR,
        Label::Fake => FAKE_COLOR,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub legend: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: usize,
}

/// CSS `conic-gradient` drawing `slices` in order, proportional to their values.
pub fn conic_gradient(slices: &[PieSlice]) -> String {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    if total <= 0.0 {
        return "conic-gradient(var(--muted-color) 0% 100%)".to_string();
    }

    let mut start = 0.0;
    let stops: Vec<String> = slices
        .iter()
        .map(|slice| {
            let end = start + slice.value.max(0.0) / total * 100.0;
            let stop = format!("{} {:.2}% {:.2}%", slice.color, start, end);
            start = end;
            stop
        })
        .collect();

    format!("conic-gradient({})", stops.join(", "))
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub slices: Vec<PieSlice>,
}

#[function_component(PieChart)]
pub fn pie_chart(props: &PieChartProps) -> Html {
    html! {
        <div class="pie-chart">
            <div class="pie" style={format!("background: {};", conic_gradient(&props.slices))}></div>
            <ul class="chart-legend">
                { for props.slices.iter().map(|slice| html! {
                    <li>
                        <span class="legend-swatch" style={format!("background-color: {};", slice.color)}></span>
                        { &slice.legend }
                    </li>
                })}
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub bars: Vec<Bar>,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = props.bars.iter().map(|b| b.value).max().unwrap_or(0).max(1);

    html! {
        <div class="bar-chart">
            { for props.bars.iter().map(|bar| {
                let height = bar.value as f64 / max as f64 * 100.0;
                html! {
                    <div class="bar-column">
                        <div class="bar-value">{ bar.value }</div>
                        <div class="bar-track">
                            <div class="bar" style={format!("height: {}%; background-color: {};", height, BAR_COLOR)}></div>
                        </div>
                        <div class="bar-label">{ &bar.label }</div>
                    </div>
                }
            })}
        </div>
    }
}
