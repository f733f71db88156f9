macro_rules! declare_value_ids {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Keywords naming the CSS functions known to the engine.
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
        pub enum CssValueId {
            $($variant),+
        }

        impl CssValueId {
            const ALL: &'static [CssValueId] = &[$(CssValueId::$variant),+];

            /// Canonical (lowercase) spelling of the keyword.
            #[inline]
            pub fn name(self) -> &'static str {
                match self {
                    $(CssValueId::$variant => $name),+
                }
            }
        }
    };
}

declare_value_ids! {
    Attr => "attr",
    Calc => "calc",
    Clamp => "clamp",
    CubicBezier => "cubic-bezier",
    Hsl => "hsl",
    Hsla => "hsla",
    ImageSet => "image-set",
    LinearGradient => "linear-gradient",
    Matrix => "matrix",
    Max => "max",
    Min => "min",
    RadialGradient => "radial-gradient",
    Rgb => "rgb",
    Rgba => "rgba",
    Rotate => "rotate",
    Scale => "scale",
    Steps => "steps",
    Translate => "translate",
    Url => "url",
    Var => "var",
}

impl CssValueId {
    /// ASCII case-insensitive keyword lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }
}
