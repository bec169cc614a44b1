//! Option catalogs offered by the four panel selectors.
//!
//! A catalog is an ordered list of options keyed by a display label. Labels
//! are unique within a catalog so lookup-by-label yields zero or one match.

use crate::error::CatalogError;
use fnv::FnvHashSet;

// Named defaults each selector starts from
pub const DEFAULT_BACKGROUND: &str = "Nvidia Green Studio";
pub const DEFAULT_DOORS: &str = "Closed";
pub const DEFAULT_WHEELS: &str = "Straight";
pub const DEFAULT_PACKAGE: &str = "Nvidia Green Black";

/// Anything a selector can offer. Only the label is interpreted; every other
/// field is payload carried through to the selection callback untouched.
pub trait Labeled {
    fn label(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackgroundOption {
    pub label: String,
    pub variant: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoorOption {
    pub label: String,
    pub variant: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelOption {
    pub label: String,
    pub variant: String,
}

/// Paint and trim package. Each attribute is applied independently by the
/// remote scene.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageOption {
    pub label: String,
    pub car_paint: String,
    pub int_leather: String,
    pub int_leather_dash: String,
    pub int_trim_color: String,
    pub light_strip_color: String,
    pub screen_color: String,
    pub stitch_color: String,
    pub wheel_colors: String,
}

macro_rules! variant_option {
    ($ty:ident) => {
        impl $ty {
            pub fn new(label: impl Into<String>, variant: impl Into<String>) -> Self {
                Self {
                    label: label.into(),
                    variant: variant.into(),
                }
            }
        }

        impl Labeled for $ty {
            fn label(&self) -> &str {
                &self.label
            }
        }
    };
}

variant_option!(BackgroundOption);
variant_option!(DoorOption);
variant_option!(WheelOption);

impl Labeled for PackageOption {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered, label-unique list of options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog<T> {
    options: Vec<T>,
}

impl<T: Labeled> Catalog<T> {
    pub fn new(options: Vec<T>) -> Result<Self, CatalogError> {
        {
            let mut seen = FnvHashSet::default();
            for option in &options {
                if !seen.insert(option.label()) {
                    return Err(CatalogError::DuplicateLabel(option.label().to_owned()));
                }
            }
        }
        Ok(Self { options })
    }

    /// Position of the first option carrying `label`.
    pub fn find_index(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|o| o.label() == label)
    }

    pub fn find(&self, label: &str) -> Option<&T> {
        self.find_index(label).map(|i| &self.options[i])
    }
}

impl<T> Catalog<T> {
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.options.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.options.iter()
    }
}

impl<T> std::ops::Index<usize> for Catalog<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.options[index]
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

// (label, variant)
const BACKGROUNDS: &[(&str, &str)] = &[
    ("Bay Bridge", "Bay_Bridge"),
    ("Nvidia Dark Studio Ring", "Nvidia_Dark_Studio_Ring"),
    ("Nvidia Gray Studio", "Nvidia_Gray_Studio"),
    ("Nvidia Green Exterior", "Nvidia_Green_Exterior"),
    ("Nvidia Green Studio", "Nvidia_Green_Studio"),
    ("Pacific Highway", "Pacific_Highway"),
];

const DOORS: &[(&str, &str)] = &[
    ("Open", "All_Open"),
    ("Closed", "All_Closed"),
    ("Driver's Door Open", "FrontLeft_Open"),
];

const WHEELS: &[(&str, &str)] = &[
    ("Straight", "Straight"),
    ("Left", "Left"),
    ("Right", "Right"),
];

// label, paint, leather, leather dash, trim, light strip, screen, stitch, wheels
const PACKAGES: &[[&str; 9]] = &[
    ["Blanco", "Blanco", "Cloud", "Cloud", "Cloud", "White", "White", "Black", "WhiteGlow"],
    ["Blue Silver", "BlueSilver", "Grey", "Grey", "Black", "blue", "White", "Black", "Silver"],
    ["Hornet", "Hornet", "Hornet", "Hornet", "Hornet", "Yellow", "Hornet", "Hornet", "Black"],
    ["Noir", "Noir", "Grey", "Grey", "Cloud", "White", "White", "Black", "Silver"],
    [
        "Nvidia Green Black",
        "Nvidia_Green_Black",
        "NvidiaGreen",
        "NvidiaGreen",
        "NvidiaGreen",
        "blue",
        "Blue",
        "Grey",
        "NvidiaSet",
    ],
    ["Olive", "Olive", "Tan", "Tan", "Black", "blue", "Blue", "Black", "Gold"],
    ["Sakura", "Sakura", "Cloud", "Cloud", "Cloud", "Pink", "Pink", "Grey", "SakuraGlow"],
    ["Silver", "Silver", "Cloud", "Cloud", "Grey", "blue", "Blue", "Grey", "Silver"],
    ["Vampire", "Vampire", "Black", "Black", "Grey", "Red", "Red", "Red", "Rojo"],
    ["Vino", "Vino", "Tan", "Tan", "Cream", "blue", "Blue", "Grey", "Gold"],
];

/// The four catalogs shown in the sidebar.
#[derive(Clone, Debug)]
pub struct Catalogs {
    pub backgrounds: Catalog<BackgroundOption>,
    pub doors: Catalog<DoorOption>,
    pub wheels: Catalog<WheelOption>,
    pub packages: Catalog<PackageOption>,
}

impl Catalogs {
    /// Catalogs matching the assets shipped with the streamed vehicle scene.
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            backgrounds: Catalog::new(
                BACKGROUNDS
                    .iter()
                    .map(|&(l, v)| BackgroundOption::new(l, v))
                    .collect(),
            )?,
            doors: Catalog::new(DOORS.iter().map(|&(l, v)| DoorOption::new(l, v)).collect())?,
            wheels: Catalog::new(WHEELS.iter().map(|&(l, v)| WheelOption::new(l, v)).collect())?,
            packages: Catalog::new(PACKAGES.iter().map(package_from_row).collect())?,
        })
    }
}

fn package_from_row(row: &[&str; 9]) -> PackageOption {
    let [label, paint, leather, leather_dash, trim, light_strip, screen, stitch, wheels] = *row;
    PackageOption {
        label: label.into(),
        car_paint: paint.into(),
        int_leather: leather.into(),
        int_leather_dash: leather_dash.into(),
        int_trim_color: trim.into(),
        light_strip_color: light_strip.into(),
        screen_color: screen.into(),
        stitch_color: stitch.into(),
        wheel_colors: wheels.into(),
    }
}
