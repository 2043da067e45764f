//! Line classification for OBJ and MTL records
//!
//! A record is keyed by its first whitespace-delimited token. One
//! classifier covers both document grammars since they never collide.

/// Record kind identified by a line's first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `o` — named object
    Object,
    /// `g` — named group
    Group,
    /// `v` — vertex position
    Position,
    /// `vt` — texture coordinate
    TexCoord,
    /// `vn` — vertex normal
    Normal,
    /// `f` — face
    Face,
    /// `usemtl` — material binding
    UseMaterial,
    /// `mtllib` — material file reference
    MaterialLib,
    /// `newmtl` — start of a material block
    NewMaterial,
    /// `Ka` — ambient color
    Ambient,
    /// `Kd` — diffuse color
    Diffuse,
    /// `Ks` — specular color
    Specular,
    /// `Ns` — specular exponent
    SpecularExponent,
    /// `Ni` — optical density
    OpticalDensity,
    /// `d` — dissolve
    Dissolve,
    /// `illum` — illumination model
    Illumination,
    /// `map_Ka` — ambient texture map
    AmbientMap,
    /// `map_Kd` — diffuse texture map
    DiffuseMap,
    /// `map_Ks` — specular texture map
    SpecularMap,
    /// `map_Ns` — specular highlight map
    HighlightMap,
    /// `map_d` — alpha texture map
    DissolveMap,
    /// `map_Bump`, `map_bump`, or `bump` — bump map
    BumpMap,
}

/// Classify a raw line into a keyword and its trimmed tail.
///
/// Returns `None` for blank lines, `#` comments, and unrecognized
/// keywords; those records are skipped without error.
#[must_use]
pub fn classify(line: &str) -> Option<(Keyword, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (first, tail) = match line.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (line, ""),
    };

    let keyword = match first {
        "o" => Keyword::Object,
        "g" => Keyword::Group,
        "v" => Keyword::Position,
        "vt" => Keyword::TexCoord,
        "vn" => Keyword::Normal,
        "f" => Keyword::Face,
        "usemtl" => Keyword::UseMaterial,
        "mtllib" => Keyword::MaterialLib,
        "newmtl" => Keyword::NewMaterial,
        "Ka" => Keyword::Ambient,
        "Kd" => Keyword::Diffuse,
        "Ks" => Keyword::Specular,
        "Ns" => Keyword::SpecularExponent,
        "Ni" => Keyword::OpticalDensity,
        "d" => Keyword::Dissolve,
        "illum" => Keyword::Illumination,
        "map_Ka" => Keyword::AmbientMap,
        "map_Kd" => Keyword::DiffuseMap,
        "map_Ks" => Keyword::SpecularMap,
        "map_Ns" => Keyword::HighlightMap,
        "map_d" => Keyword::DissolveMap,
        "map_Bump" | "map_bump" | "bump" => Keyword::BumpMap,
        _ => return None,
    };

    Some((keyword, tail))
}
