//! Cosmetic terrain tag.

/// Terrain type carried on every cell.
///
/// Purely cosmetic: none of the core algorithms read it.  It exists so that
/// edit commands and snapshots can round-trip the tag losslessly for the
/// rendering layer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Terrain {
    #[default]
    Grass,
    Water,
    Shallow,
    Sand,
    Snow,
    Forest,
    Concrete,
    Mars,
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Terrain::Grass => "grass",
            Terrain::Water => "water",
            Terrain::Shallow => "shallow",
            Terrain::Sand => "sand",
            Terrain::Snow => "snow",
            Terrain::Forest => "forest",
            Terrain::Concrete => "concrete",
            Terrain::Mars => "mars",
        };
        f.write_str(name)
    }
}
