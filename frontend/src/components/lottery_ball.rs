use leptos::*;
use shared::balls::{assign_colors, BallColor, LotteryBall as Ball};

pub fn ball_class(color: BallColor) -> String {
    format!("lottery-ball lottery-ball-{}", color.as_str())
}

/// One coloured number ball.
#[component]
pub fn LotteryBall(ball: Ball) -> impl IntoView {
    view! {
        <span class=ball_class(ball.color)>{ball.number}</span>
    }
}

/// A row of balls; colours restart at the first ball of every row.
#[component]
pub fn BallRow(numbers: Vec<u32>) -> impl IntoView {
    view! {
        <div class="ball-row">
            {assign_colors(&numbers)
                .into_iter()
                .map(|ball| view! { <LotteryBall ball=ball /> })
                .collect_view()}
        </div>
    }
}
