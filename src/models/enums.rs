use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = AssessmentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(AssessmentError::InvalidInput(format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        s
                    ))),
                }
            }
        }
    };
}

str_enum!(Condition {
    Diabetes => "diabetes",
    Hypertension => "hypertension",
    Depression => "depression",
});

impl Condition {
    /// All assessed conditions in reporting order.
    pub const ALL: [Condition; 3] = [
        Condition::Diabetes,
        Condition::Hypertension,
        Condition::Depression,
    ];

    /// Position of this condition in [`Condition::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Diabetes => 0,
            Self::Hypertension => 1,
            Self::Depression => 2,
        }
    }
}

str_enum!(PhysicalActivity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(AssessmentSource {
    Heuristic => "heuristic",
    Model => "model",
});
