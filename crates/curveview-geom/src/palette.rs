/// Straight RGB color in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Curve colors, handed out in this order and then repeated.
pub const PALETTE: [Rgb; 5] = [
    Rgb::new(0.8, 0.8, 0.8),
    Rgb::new(0.8, 0.0, 0.0),
    Rgb::new(0.0, 0.8, 0.0),
    Rgb::new(0.0, 0.0, 0.8),
    Rgb::new(0.8, 0.0, 0.8),
];

/// Round-robin palette cursor.
///
/// Owned by whoever creates curves; each created curve takes the next entry.
#[derive(Debug, Clone, Default)]
pub struct ColorAssigner {
    cursor: u64,
}

impl ColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next palette color and advances the cursor.
    pub fn next_color(&mut self) -> Rgb {
        let color = self.peek();
        self.cursor = self.cursor.wrapping_add(1);
        color
    }

    /// Color the next call to [`next_color`](Self::next_color) will return.
    pub fn peek(&self) -> Rgb {
        PALETTE[(self.cursor % PALETTE.len() as u64) as usize]
    }

    /// Number of colors handed out so far.
    pub fn assigned(&self) -> u64 {
        self.cursor
    }
}
