use super::charts::{label_color, Bar, BarChart, PieChart, PieSlice};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::chart::percent;
use shared::{ImageFlow, Label};
use yew::prelude::*;

type Flow = ImageFlow<GlooFile, ObjectUrl>;

pub fn render_results(flow: &Flow) -> Html {
    let Some(verdict) = flow.verdict() else {
        return html! {};
    };

    // anything that is not a clean "Real" is styled as a warning, errors included
    let tone = match verdict.label() {
        Some(Label::Real) => "real",
        _ => "fake",
    };

    let slices: Vec<PieSlice> = flow
        .breakdown()
        .into_iter()
        .map(|slice| PieSlice {
            legend: format!("{}: {}", slice.name, percent(slice.value, 1)),
            value: slice.value,
            color: label_color(slice.name),
        })
        .collect();

    html! {
        <div class="result-section">
            <div class="result-info">
                <div class={classes!("result-text", tone)}>
                    <p><strong>{"Result:"}</strong>{ format!(" {}", verdict.text()) }</p>
                    if let Some(confidence) = verdict.confidence() {
                        <p><strong>{"Confidence:"}</strong>{ format!(" {}", percent(confidence, 2)) }</p>
                    }
                </div>

                if !slices.is_empty() {
                    <div class="chart-wrapper">
                        <PieChart {slices} />
                    </div>
                }
            </div>
        </div>
    }
}

pub fn render_history(flow: &Flow) -> Html {
    if flow.history().is_empty() {
        return html! {};
    }

    let bars: Vec<Bar> = flow
        .history_summary()
        .into_iter()
        .map(|datum| Bar {
            label: datum.name.to_string(),
            value: datum.count,
        })
        .collect();

    html! {
        <>
            <div class="history-section">
                <h2><i class="fa-solid fa-clock-rotate-left"></i>{" Prediction History"}</h2>
                <div class="history-list">
                    { for flow.history().iter().enumerate().map(|(index, entry)| html! {
                        <div class="history-card" key={entry.id.to_string()}>
                            <img src={entry.image.to_string()} alt={format!("Prediction {}", index)} />
                            <p class={entry.prediction.css_class()}>{ entry.prediction.to_string() }</p>
                            if let Some(probability) = entry.probability {
                                <small>{ format!("Conf: {}", percent(probability, 2)) }</small>
                            }
                        </div>
                    })}
                </div>
            </div>

            <div class="chart-section">
                <h2><i class="fa-solid fa-chart-column"></i>{" History Summary"}</h2>
                <BarChart {bars} />
            </div>
        </>
    }
}
