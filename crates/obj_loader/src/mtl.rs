//! MTL material document parser
//!
//! Parses Wavefront .mtl text into an ordered list of [`Material`]
//! records. The grammar mirrors the geometry document: one keyword per
//! line, classified by its first token.

use crate::error::{ObjError, ParseErrorKind};
use crate::foundation::math::Vec3;
use crate::model::Material;
use crate::parse::line::{classify, Keyword};

/// Parse the text of a material document into an ordered material list.
///
/// `newmtl` pushes the in-progress material and starts a new one; an empty
/// name defaults to `"none"`. Property records seen before the first
/// `newmtl` are ignored. Color records need exactly three components and
/// are skipped otherwise; malformed numeric values fail the parse with
/// line numbers local to the material document.
pub fn parse(text: &str) -> Result<Vec<Material>, ObjError> {
    let mut materials = Vec::new();
    let mut current: Option<Material> = None;

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let Some((keyword, tail)) = classify(raw) else {
            continue;
        };

        if keyword == Keyword::NewMaterial {
            if let Some(material) = current.take() {
                materials.push(material);
            }
            let name = if tail.is_empty() {
                "none".to_string()
            } else {
                tail.to_string()
            };
            current = Some(Material {
                name,
                ..Material::default()
            });
            continue;
        }

        let Some(material) = current.as_mut() else {
            continue;
        };

        match keyword {
            Keyword::Ambient => {
                if let Some(color) = parse_color(tail, line, raw)? {
                    material.ka = color;
                }
            }
            Keyword::Diffuse => {
                if let Some(color) = parse_color(tail, line, raw)? {
                    material.kd = color;
                }
            }
            Keyword::Specular => {
                if let Some(color) = parse_color(tail, line, raw)? {
                    material.ks = color;
                }
            }
            Keyword::SpecularExponent => material.ns = parse_scalar(tail, line, raw)?,
            Keyword::OpticalDensity => material.ni = parse_scalar(tail, line, raw)?,
            Keyword::Dissolve => material.d = parse_scalar(tail, line, raw)?,
            Keyword::Illumination => material.illum = parse_int(tail, line, raw)?,
            Keyword::AmbientMap => material.map_ka = tail.to_string(),
            Keyword::DiffuseMap => material.map_kd = tail.to_string(),
            Keyword::SpecularMap => material.map_ks = tail.to_string(),
            Keyword::HighlightMap => material.map_ns = tail.to_string(),
            Keyword::DissolveMap => material.map_d = tail.to_string(),
            Keyword::BumpMap => material.map_bump = tail.to_string(),
            // Geometry keywords carry no meaning in a material document.
            _ => {}
        }
    }

    if let Some(material) = current {
        materials.push(material);
    }

    Ok(materials)
}

/// `None` when the record does not have exactly three components.
fn parse_color(tail: &str, line: usize, raw: &str) -> Result<Option<Vec3>, ObjError> {
    let tokens: Vec<&str> = tail.split_whitespace().collect();
    if tokens.len() != 3 {
        return Ok(None);
    }

    let mut components = [0.0f32; 3];
    for (slot, token) in components.iter_mut().zip(&tokens) {
        *slot = token.parse().map_err(|_| {
            ObjError::at(ParseErrorKind::MalformedNumber((*token).to_string()), line, raw)
        })?;
    }
    Ok(Some(Vec3::new(components[0], components[1], components[2])))
}

fn parse_scalar(tail: &str, line: usize, raw: &str) -> Result<f32, ObjError> {
    let token = tail.split_whitespace().next().unwrap_or("");
    token.parse().map_err(|_| {
        ObjError::at(ParseErrorKind::MalformedNumber(token.to_string()), line, raw)
    })
}

fn parse_int(tail: &str, line: usize, raw: &str) -> Result<i32, ObjError> {
    let token = tail.split_whitespace().next().unwrap_or("");
    token.parse().map_err(|_| {
        ObjError::at(ParseErrorKind::MalformedNumber(token.to_string()), line, raw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_simple_material() {
        let contents = r"
# simple material
newmtl TestMaterial
Ka 1.0 1.0 1.0
Kd 0.8 0.2 0.2
Ks 0.5 0.5 0.5
Ns 250.0
Ni 1.45
d 1.0
illum 2
";
        let materials = parse(contents).unwrap();
        assert_eq!(materials.len(), 1);

        let mat = &materials[0];
        assert_eq!(mat.name, "TestMaterial");
        assert_eq!(mat.kd, Vec3::new(0.8, 0.2, 0.2));
        assert_eq!(mat.ns, 250.0);
        assert_eq!(mat.ni, 1.45);
        assert_eq!(mat.d, 1.0);
        assert_eq!(mat.illum, 2);
    }

    #[test]
    fn parses_texture_maps_with_spaces() {
        let contents = r"
newmtl Textured
map_Kd textures/my diffuse.png
map_Bump textures/normal.png
bump fallback.png
";
        let materials = parse(contents).unwrap();
        let mat = &materials[0];
        assert_eq!(mat.map_kd, "textures/my diffuse.png");
        // The later bump record overwrites the earlier alias.
        assert_eq!(mat.map_bump, "fallback.png");
    }

    #[test]
    fn parses_multiple_materials_in_order() {
        let contents = r"
newmtl First
Kd 1.0 0.0 0.0

newmtl Second
Kd 0.0 1.0 0.0
";
        let materials = parse(contents).unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].name, "First");
        assert_eq!(materials[0].kd, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(materials[1].name, "Second");
        assert_eq!(materials[1].kd, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn unnamed_material_defaults_to_none() {
        let materials = parse("newmtl\nKd 0.1 0.2 0.3\n").unwrap();
        assert_eq!(materials[0].name, "none");
    }

    #[test]
    fn wrong_arity_color_is_skipped() {
        let contents = "newmtl M\nKa 1.0 1.0\nKd 0.5 0.5 0.5 0.5\n";
        let materials = parse(contents).unwrap();
        assert_eq!(materials[0].ka, Vec3::zeros());
        assert_eq!(materials[0].kd, Vec3::zeros());
    }

    #[test]
    fn malformed_scalar_fails_with_line_context() {
        let err = parse("newmtl M\nNs shiny\n").unwrap_err();
        match err {
            ObjError::Parse { kind, line, text } => {
                assert_eq!(kind, ParseErrorKind::MalformedNumber("shiny".to_string()));
                assert_eq!(line, 2);
                assert_eq!(text, "Ns shiny");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_color_component_fails() {
        let err = parse("newmtl M\nKa 0.1 red 0.3\n").unwrap_err();
        assert!(matches!(
            err,
            ObjError::Parse {
                kind: ParseErrorKind::MalformedNumber(_),
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn properties_before_newmtl_are_ignored() {
        let materials = parse("Kd 1.0 1.0 1.0\nnewmtl M\n").unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].kd, Vec3::zeros());
    }

    #[test]
    fn document_without_materials_yields_empty_list() {
        assert!(parse("# nothing here\n").unwrap().is_empty());
    }
}
