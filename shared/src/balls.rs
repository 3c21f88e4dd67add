#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallColor {
    Red,
    Brown,
    Green,
    Purple,
    Orange,
}

impl BallColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BallColor::Red => "red",
            BallColor::Brown => "brown",
            BallColor::Green => "green",
            BallColor::Purple => "purple",
            BallColor::Orange => "orange",
        }
    }
}

/// Colour cycle shared by winning and machine numbers.
pub const PALETTE: [BallColor; 5] = [
    BallColor::Red,
    BallColor::Brown,
    BallColor::Green,
    BallColor::Purple,
    BallColor::Orange,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotteryBall {
    pub number: u32,
    pub color: BallColor,
}

/// Pair each number with `PALETTE[index % PALETTE.len()]`.
pub fn assign_colors(numbers: &[u32]) -> Vec<LotteryBall> {
    numbers
        .iter()
        .enumerate()
        .map(|(index, &number)| LotteryBall {
            number,
            color: PALETTE[index % PALETTE.len()],
        })
        .collect()
}
