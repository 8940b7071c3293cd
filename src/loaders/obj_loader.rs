//! Wavefront OBJ/MTL importer
//!
//! Reads `<base>.mtl` and then `<base>.obj` and produces a non-indexed triangle
//! [`Mesh`] with one vertex per face corner. Material colors are copied into
//! every vertex, so the mesh renders without any material lookup.
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::log;
use crate::models::{
    Color, Image, ImportedLayout, Material, Mesh, VertexAmbient, VertexBufferLayout,
    VertexDiffuse, VertexNormal, VertexOpacity, VertexPosition, VertexSpecular, VertexTexture,
    VertexTextureIndex,
};

/// Texture index value of untextured vertices
pub const UNTEXTURED: usize = 99;

/// Importer error
#[derive(Debug)]
pub enum ImportError {
    /// File exists but could not be read
    Io(std::io::Error),
    /// Number could not be parsed
    ParseFloat {
        line: usize,
        source: std::num::ParseFloatError,
    },
    /// Face index could not be parsed
    ParseIndex {
        line: usize,
        source: std::num::ParseIntError,
    },
    /// Directive has missing arguments or appears out of place
    MalformedDirective { line: usize, directive: String },
    /// Face is not a triangle
    UnsupportedFace { line: usize, corners: usize },
    /// Face refers to a position, normal or texture coordinate that was not declared
    IndexOutOfRange {
        line: usize,
        kind: &'static str,
        index: usize,
    },
    /// `usemtl` refers to a material missing in the MTL file
    UnknownMaterial { line: usize, name: String },
    /// Requested vertex layout differs from the importer output
    LayoutMismatch {
        expected: Vec<usize>,
        given: Vec<usize>,
    },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "Import IO error ({})", err),
            ImportError::ParseFloat { line, source } => {
                write!(f, "Line {}: bad number ({})", line, source)
            }
            ImportError::ParseIndex { line, source } => {
                write!(f, "Line {}: bad face index ({})", line, source)
            }
            ImportError::MalformedDirective { line, directive } => {
                write!(f, "Line {}: malformed `{}` directive", line, directive)
            }
            ImportError::UnsupportedFace { line, corners } => write!(
                f,
                "Line {}: only triangles are supported, face has {} corners",
                line, corners
            ),
            ImportError::IndexOutOfRange { line, kind, index } => {
                write!(f, "Line {}: {} index {} is out of range", line, kind, index)
            }
            ImportError::UnknownMaterial { line, name } => {
                write!(f, "Line {}: unknown material `{}`", line, name)
            }
            ImportError::LayoutMismatch { expected, given } => write!(
                f,
                "Vertex layout {:?} does not match imported layout {:?}",
                given, expected
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::ParseFloat { source, .. } => Some(source),
            ImportError::ParseIndex { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Io(err)
    }
}

/// OBJ/MTL importer
///
/// Textures referenced by `map_Kd` stay in the loader after import and can be
/// queried by the index stored in vertices.
#[derive(Default)]
pub struct ObjLoader {
    materials: HashMap<String, Material>,
    /// False until an MTL file was read, `usemtl` then falls back to the default material
    materials_read: bool,
    textures: Vec<Image>,
    vertices_count: usize,
}

/// Per-corner output of the OBJ pass
#[derive(Default)]
struct Corners {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_uvs: Vec<[f32; 2]>,
    ambient: Vec<[f32; 3]>,
    diffuse: Vec<[f32; 3]>,
    specular: Vec<[f32; 3]>,
    opacity: Vec<f32>,
    texture: Vec<f32>,
}

impl Corners {
    fn push(
        &mut self,
        position: [f32; 3],
        tex_uv: [f32; 2],
        normal: [f32; 3],
        material: &Material,
    ) {
        self.positions.push(position);
        self.tex_uvs.push(tex_uv);
        self.normals.push(normal);
        self.ambient.push(material.ambient.into());
        self.diffuse.push(material.diffuse.into());
        self.specular.push(material.specular.into());
        self.opacity.push(material.opacity);
        self.texture.push(material.texture.unwrap_or(UNTEXTURED) as f32);
    }

    fn into_mesh(self, name: &str) -> Mesh {
        let mut mesh = Mesh::new(name);
        mesh.set_vertices::<VertexPosition>(self.positions);
        mesh.set_vertices::<VertexNormal>(self.normals);
        mesh.set_vertices::<VertexTexture>(self.tex_uvs);
        mesh.set_vertices::<VertexAmbient>(self.ambient);
        mesh.set_vertices::<VertexDiffuse>(self.diffuse);
        mesh.set_vertices::<VertexSpecular>(self.specular);
        mesh.set_vertices::<VertexOpacity>(self.opacity);
        mesh.set_vertices::<VertexTextureIndex>(self.texture);
        mesh
    }
}

impl ObjLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Imports `<base>.mtl` and `<base>.obj`
    ///
    /// `layout` lists the number of components of every vertex attribute the
    /// caller expects and must match [`ImportedLayout`]. Missing files are
    /// logged and read as empty.
    pub fn load(&mut self, base: impl AsRef<Path>, layout: &[usize]) -> Result<Mesh, ImportError> {
        let expected = ImportedLayout::arities();
        if layout != expected.as_slice() {
            return Err(ImportError::LayoutMismatch {
                expected,
                given: layout.to_vec(),
            });
        }

        self.reset();

        let base = base.as_ref();
        let name = base
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("mesh")
            .to_string();
        let dir = base.parent().unwrap_or_else(|| Path::new(""));

        if let Some(reader) = Self::open(&with_extension(base, "mtl"))? {
            self.read_mtl(reader, dir)?;
        }

        let mesh = match Self::open(&with_extension(base, "obj"))? {
            Some(reader) => self.read_obj(reader, &name)?,
            None => Mesh::new(&name),
        };

        log::info!(
            "Imported `{}`: {} vertices, {} textures",
            name,
            mesh.count_vertices(),
            self.textures.len()
        );
        Ok(mesh)
    }

    /// Parses MTL directives, texture paths are resolved relative to `dir`
    pub fn read_mtl<R: BufRead>(&mut self, reader: R, dir: &Path) -> Result<(), ImportError> {
        self.materials_read = true;
        let mut current: Option<Material> = None;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line?;
            let line = line.trim();
            let mut tokens = line.split_whitespace();
            let directive = match tokens.next() {
                Some(directive) if !directive.starts_with('#') => directive,
                _ => continue,
            };

            if directive == "newmtl" {
                let name = rest_of_line(line, directive)
                    .ok_or_else(|| malformed(line_number, directive))?;
                if let Some(material) = current.take() {
                    self.materials.insert(material.name.clone(), material);
                }
                current = Some(Material::new(name));
                continue;
            }

            let known = matches!(directive, "Ka" | "Kd" | "Ks" | "d" | "map_Kd");
            if !known {
                continue;
            }
            let material = current
                .as_mut()
                .ok_or_else(|| malformed(line_number, directive))?;

            match directive {
                "Ka" => {
                    let rgb = parse_floats::<3>(tokens, line_number, directive)?;
                    material.ambient = Color::from(rgb);
                }
                "Kd" => {
                    let rgb = parse_floats::<3>(tokens, line_number, directive)?;
                    material.diffuse = Color::from(rgb);
                }
                "Ks" => {
                    let rgb = parse_floats::<3>(tokens, line_number, directive)?;
                    material.specular = Color::from(rgb);
                }
                "d" => material.opacity = parse_floats::<1>(tokens, line_number, directive)?[0],
                _ => {
                    let path = rest_of_line(line, directive)
                        .ok_or_else(|| malformed(line_number, directive))?;
                    let texture = self.load_texture(&dir.join(path));
                    material.texture = Some(texture);
                }
            }
        }

        if let Some(material) = current.take() {
            self.materials.insert(material.name.clone(), material);
        }
        Ok(())
    }

    /// Parses OBJ directives into a mesh named `name`
    pub fn read_obj<R: BufRead>(&mut self, reader: R, name: &str) -> Result<Mesh, ImportError> {
        // index 0 is a sentinel, so 1-based OBJ indices address arrays directly
        let mut positions: Vec<[f32; 3]> = vec![[-1.0; 3]];
        let mut normals: Vec<[f32; 3]> = vec![[-1.0; 3]];
        let mut tex_uvs: Vec<[f32; 2]> = vec![[-1.0; 2]];

        let default_material = Material::default();
        let mut material_name: Option<String> = None;
        let mut corners = Corners::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line?;
            let mut tokens = line.split_whitespace();
            let directive = match tokens.next() {
                Some(directive) if !directive.starts_with('#') => directive,
                _ => continue,
            };

            match directive {
                "v" => positions.push(parse_floats::<3>(tokens, line_number, directive)?),
                "vn" => normals.push(parse_floats::<3>(tokens, line_number, directive)?),
                "vt" => tex_uvs.push(parse_floats::<2>(tokens, line_number, directive)?),
                "usemtl" => {
                    let name = rest_of_line(line.trim(), directive)
                        .ok_or_else(|| malformed(line_number, directive))?;
                    if !self.materials_read {
                        log::warn!(
                            "Line {}: no materials were read, `{}` uses the default material",
                            line_number,
                            name
                        );
                        material_name = None;
                        continue;
                    }
                    if !self.materials.contains_key(name) {
                        return Err(ImportError::UnknownMaterial {
                            line: line_number,
                            name: name.to_string(),
                        });
                    }
                    material_name = Some(name.to_string());
                }
                "f" => {
                    let face = tokens.collect::<Vec<_>>();
                    if face.len() != 3 {
                        return Err(ImportError::UnsupportedFace {
                            line: line_number,
                            corners: face.len(),
                        });
                    }
                    let material = material_name
                        .as_ref()
                        .and_then(|name| self.materials.get(name))
                        .unwrap_or(&default_material);

                    for corner in face {
                        let [p, t, n] = parse_corner(corner, line_number)?;
                        corners.push(
                            *lookup(&positions, p, "position", line_number)?,
                            *lookup(&tex_uvs, t, "texture coordinate", line_number)?,
                            *lookup(&normals, n, "normal", line_number)?,
                            material,
                        );
                    }
                }
                _ => {}
            }
        }

        let mesh = corners.into_mesh(name);
        self.vertices_count = mesh.count_vertices();
        Ok(mesh)
    }

    /// Returns material parsed from the MTL file
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Returns all loaded textures in order of their first `map_Kd` appearance
    pub fn textures(&self) -> &[Image] {
        &self.textures
    }

    /// Moves loaded textures out of the loader
    pub fn take_textures(&mut self) -> Vec<Image> {
        std::mem::take(&mut self.textures)
    }

    pub fn texture(&self, index: usize) -> Option<&Image> {
        self.textures.get(index)
    }

    /// Returns `index` if such texture exists, [`UNTEXTURED`] otherwise
    pub fn texture_index(&self, index: usize) -> usize {
        if index < self.textures.len() {
            index
        } else {
            UNTEXTURED
        }
    }

    /// Returns number of vertices produced by the last import
    pub fn count_vertices(&self) -> usize {
        self.vertices_count
    }

    fn reset(&mut self) {
        self.materials.clear();
        self.materials_read = false;
        self.textures.clear();
        self.vertices_count = 0;
    }

    fn open(path: &Path) -> Result<Option<BufReader<File>>, ImportError> {
        match File::open(path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("File {:?} does not exist, reading it as empty", path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Every `map_Kd` appends a texture, even if the path was seen before
    fn load_texture(&mut self, path: &Path) -> usize {
        let image = crate::loaders::ImageLoader::read_file(path).unwrap_or_else(|| {
            log::error!("Texture {:?} replaced with a placeholder", path);
            let name = path
                .file_stem()
                .and_then(|n| n.to_str())
                .unwrap_or("texture");
            Image::placeholder(name)
        });

        let index = self.textures.len();
        self.textures.push(image);
        index
    }
}

fn with_extension(base: &Path, extension: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

fn malformed(line: usize, directive: &str) -> ImportError {
    ImportError::MalformedDirective {
        line,
        directive: directive.to_string(),
    }
}

/// Returns trimmed remainder of the line after the directive keyword
fn rest_of_line<'a>(line: &'a str, directive: &str) -> Option<&'a str> {
    line.strip_prefix(directive)
        .map(str::trim)
        .filter(|rest| !rest.is_empty())
}

/// Parses the first `N` tokens as floats, extra tokens are ignored
fn parse_floats<'a, const N: usize>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
    directive: &str,
) -> Result<[f32; N], ImportError> {
    let mut values = [0.0; N];
    for value in values.iter_mut() {
        let token = tokens.next().ok_or_else(|| malformed(line, directive))?;
        *value = token
            .parse::<f32>()
            .map_err(|source| ImportError::ParseFloat { line, source })?;
    }
    Ok(values)
}

/// Parses a `P/T/N` face corner
fn parse_corner(corner: &str, line: usize) -> Result<[usize; 3], ImportError> {
    let parts = corner.split('/').collect::<Vec<_>>();
    if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
        return Err(malformed(line, "f"));
    }
    let mut indices = [0; 3];
    for (index, part) in indices.iter_mut().zip(parts) {
        *index = part
            .parse::<usize>()
            .map_err(|source| ImportError::ParseIndex { line, source })?;
    }
    Ok(indices)
}

fn lookup<'a, T>(
    values: &'a [T],
    index: usize,
    kind: &'static str,
    line: usize,
) -> Result<&'a T, ImportError> {
    if index == 0 {
        return Err(ImportError::IndexOutOfRange { line, kind, index });
    }
    values
        .get(index)
        .ok_or(ImportError::IndexOutOfRange { line, kind, index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    const TRIANGLE_OBJ: &str = "\
# one triangle
v 0.0 0.0 0.0
v 1.0 2.0 3.0
v -1.0 0.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 0.0 1.0
vn 0.0 0.0 1.0
vn 0.0 1.0 0.0
vn 1.0 0.0 0.0
usemtl chalk
f 1/1/1 2/2/2 3/3/3
";

    const CHALK_MTL: &str = "\
newmtl chalk
Ka 0.1 0.2 0.3
Kd 0.4 0.5 0.6
Ks 0.7 0.8 0.9
d 0.5
";

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).expect("file written");
    }

    fn layout() -> Vec<usize> {
        ImportedLayout::arities()
    }

    #[test]
    fn one_face_gives_three_vertices_with_material() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "triangle.obj", TRIANGLE_OBJ);
        write(dir.path(), "triangle.mtl", CHALK_MTL);

        let mut loader = ObjLoader::new();
        let mesh = loader
            .load(dir.path().join("triangle"), &layout())
            .expect("imported");

        assert_eq!(mesh.count_vertices(), 3);
        assert_eq!(loader.count_vertices(), 3);
        let ambient = mesh.vertices::<VertexAmbient>().expect("ambient");
        let diffuse = mesh.vertices::<VertexDiffuse>().expect("diffuse");
        let specular = mesh.vertices::<VertexSpecular>().expect("specular");
        let opacity = mesh.vertices::<VertexOpacity>().expect("opacity");
        let texture = mesh.vertices::<VertexTextureIndex>().expect("texture");
        for i in 0..3 {
            assert_eq!(ambient[i], [0.1, 0.2, 0.3]);
            assert_eq!(diffuse[i], [0.4, 0.5, 0.6]);
            assert_eq!(specular[i], [0.7, 0.8, 0.9]);
            assert_eq!(opacity[i], 0.5);
            assert_eq!(texture[i], UNTEXTURED as f32);
        }

        let positions = mesh.vertices::<VertexPosition>().expect("positions");
        assert_eq!(positions[1], [1.0, 2.0, 3.0]);
        let normals = mesh.vertices::<VertexNormal>().expect("normals");
        assert_eq!(normals[2], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn bounds_are_computed_from_faces() {
        let mut loader = ObjLoader::new();
        let mesh = loader
            .read_obj(TRIANGLE_OBJ.replace("usemtl chalk\n", "").as_bytes(), "triangle")
            .expect("parsed");
        let bounds = mesh.bounds();
        assert_eq!(bounds.min, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.dimensions, Vec3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn missing_mtl_uses_default_material() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(
            dir.path(),
            "plain.obj",
            &TRIANGLE_OBJ.replace("usemtl chalk\n", ""),
        );

        let mut loader = ObjLoader::new();
        let mesh = loader
            .load(dir.path().join("plain"), &layout())
            .expect("imported");

        assert_eq!(mesh.count_vertices(), 3);
        let diffuse = mesh.vertices::<VertexDiffuse>().expect("diffuse");
        let opacity = mesh.vertices::<VertexOpacity>().expect("opacity");
        let texture = mesh.vertices::<VertexTextureIndex>().expect("texture");
        assert!(diffuse.iter().all(|c| *c == [1.0, 1.0, 1.0]));
        assert!(opacity.iter().all(|o| *o == 1.0));
        assert!(texture.iter().all(|t| *t == 99.0));
    }

    #[test]
    fn usemtl_without_mtl_file_uses_default_material() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "chalked.obj", TRIANGLE_OBJ);

        let mut loader = ObjLoader::new();
        let mesh = loader
            .load(dir.path().join("chalked"), &layout())
            .expect("missing MTL is not an error");

        assert_eq!(mesh.count_vertices(), 3);
        let ambient = mesh.vertices::<VertexAmbient>().expect("ambient");
        let diffuse = mesh.vertices::<VertexDiffuse>().expect("diffuse");
        let opacity = mesh.vertices::<VertexOpacity>().expect("opacity");
        let texture = mesh.vertices::<VertexTextureIndex>().expect("texture");
        let white = Material::default();
        assert!(ambient.iter().all(|c| *c == <[f32; 3]>::from(white.ambient)));
        assert!(diffuse.iter().all(|c| *c == [1.0, 1.0, 1.0]));
        assert!(opacity.iter().all(|o| *o == 1.0));
        assert!(texture.iter().all(|t| *t == UNTEXTURED as f32));
    }

    #[test]
    fn shared_texture_path_is_loaded_per_material() {
        let dir = tempfile::tempdir().expect("temp dir");
        image::RgbImage::from_pixel(1, 1, image::Rgb([0, 0, 200]))
            .save(dir.path().join("mat.png"))
            .expect("png written");

        let mut loader = ObjLoader::new();
        loader
            .read_mtl(
                "newmtl blue\nmap_Kd mat.png\nnewmtl navy\nmap_Kd mat.png\n".as_bytes(),
                dir.path(),
            )
            .expect("parsed");

        assert_eq!(loader.textures().len(), 2);
        assert_eq!(loader.material("blue").and_then(|m| m.texture), Some(0));
        assert_eq!(loader.material("navy").and_then(|m| m.texture), Some(1));
    }

    #[test]
    fn missing_files_give_empty_mesh() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut loader = ObjLoader::new();
        let mesh = loader
            .load(dir.path().join("nothing"), &layout())
            .expect("missing files are not an error");
        assert_eq!(mesh.count_vertices(), 0);
        assert!(loader.textures().is_empty());
    }

    #[test]
    fn unknown_material_is_rejected() {
        let mut loader = ObjLoader::new();
        loader
            .read_mtl("newmtl rubber\nKd 0.1 0.1 0.1\n".as_bytes(), Path::new(""))
            .expect("parsed");
        let result = loader.read_obj(TRIANGLE_OBJ.as_bytes(), "triangle");
        match result {
            Err(ImportError::UnknownMaterial { line, name }) => {
                assert_eq!(line, 11);
                assert_eq!(name, "chalk");
            }
            other => panic!("unexpected result: {:?}", other.map(|m| m.count_vertices())),
        }
    }

    #[test]
    fn quads_are_rejected() {
        let mut loader = ObjLoader::new();
        let obj = "v 0 0 0\nvt 0 0\nvn 0 1 0\nf 1/1/1 1/1/1 1/1/1 1/1/1\n";
        assert!(matches!(
            loader.read_obj(obj.as_bytes(), "quad"),
            Err(ImportError::UnsupportedFace { line: 4, corners: 4 })
        ));
    }

    #[test]
    fn corners_need_all_indices() {
        let mut loader = ObjLoader::new();
        let obj = "v 0 0 0\nvn 0 1 0\nf 1//1 1//1 1//1\n";
        assert!(matches!(
            loader.read_obj(obj.as_bytes(), "no_uv"),
            Err(ImportError::MalformedDirective { line: 3, .. })
        ));
    }

    #[test]
    fn undeclared_indices_are_rejected() {
        let mut loader = ObjLoader::new();
        let obj = "v 0 0 0\nvt 0 0\nvn 0 1 0\nf 1/1/1 1/1/1 2/1/1\n";
        assert!(matches!(
            loader.read_obj(obj.as_bytes(), "broken"),
            Err(ImportError::IndexOutOfRange {
                kind: "position",
                index: 2,
                ..
            })
        ));

        let obj = "v 0 0 0\nvt 0 0\nvn 0 1 0\nf 1/1/1 1/0/1 1/1/1\n";
        assert!(matches!(
            loader.read_obj(obj.as_bytes(), "broken"),
            Err(ImportError::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn bad_numbers_are_reported_with_line() {
        let mut loader = ObjLoader::new();
        let obj = "v 0 0 0\nv 0 x 0\n";
        assert!(matches!(
            loader.read_obj(obj.as_bytes(), "broken"),
            Err(ImportError::ParseFloat { line: 2, .. })
        ));
    }

    #[test]
    fn wrong_layout_is_rejected() {
        let mut loader = ObjLoader::new();
        assert!(matches!(
            loader.load("models/anything", &[3, 3, 2]),
            Err(ImportError::LayoutMismatch { .. })
        ));
    }

    #[test]
    fn textures_keep_first_appearance_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        image::RgbImage::from_pixel(1, 1, image::Rgb([200, 0, 0]))
            .save(dir.path().join("mat.png"))
            .expect("png written");
        write(
            dir.path(),
            "vault.mtl",
            "newmtl leather\nmap_Kd missing.png\nnewmtl mat\nKd 0.2 0.2 0.2\nmap_Kd mat.png\nnewmtl wood\n",
        );
        write(
            dir.path(),
            "vault.obj",
            "v 0 0 0\nvt 0 0\nvn 0 1 0\nusemtl mat\nf 1/1/1 1/1/1 1/1/1\nusemtl wood\nf 1/1/1 1/1/1 1/1/1\n",
        );

        let mut loader = ObjLoader::new();
        let mesh = loader
            .load(dir.path().join("vault"), &layout())
            .expect("imported");

        assert_eq!(loader.textures().len(), 2);
        assert_eq!(loader.texture(0).map(|t| t.resolution().width), Some(1));
        assert_eq!(loader.texture(1).map(|t| &t.data()[..3]), Some(&[200u8, 0, 0][..]));
        assert_eq!(loader.material("mat").and_then(|m| m.texture), Some(1));
        assert!(!loader.material("wood").map(|m| m.is_textured()).unwrap_or(true));
        assert_eq!(loader.texture_index(1), 1);
        assert_eq!(loader.texture_index(5), UNTEXTURED);

        let texture = mesh.vertices::<VertexTextureIndex>().expect("texture");
        assert_eq!(texture, vec![1.0, 1.0, 1.0, 99.0, 99.0, 99.0]);
    }

    #[test]
    fn interleaved_buffer_has_nineteen_floats_per_vertex() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "triangle.obj", TRIANGLE_OBJ);
        write(dir.path(), "triangle.mtl", CHALK_MTL);

        let mut loader = ObjLoader::new();
        let mesh = loader
            .load(dir.path().join("triangle"), &layout())
            .expect("imported");
        let bytes = mesh.buffer::<ImportedLayout>().expect("complete layout");
        let floats: Vec<f32> = bytemuck::pod_collect_to_vec(&bytes);

        assert_eq!(ImportedLayout::vertex_size(), 19 * 4);
        assert_eq!(floats.len(), 3 * 19);
        let second = &floats[19..38];
        assert_eq!(&second[0..3], &[1.0, 2.0, 3.0]);
        assert_eq!(&second[3..6], &[0.0, 1.0, 0.0]);
        assert_eq!(&second[6..8], &[1.0, 0.0]);
        assert_eq!(&second[11..14], &[0.4, 0.5, 0.6]);
        assert_eq!(second[17], 0.5);
        assert_eq!(second[18], 99.0);
    }

    #[test]
    fn loading_again_resets_textures() {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "a.mtl", "newmtl a\nmap_Kd none.png\n");
        let mut loader = ObjLoader::new();
        loader.load(dir.path().join("a"), &layout()).expect("imported");
        assert_eq!(loader.textures().len(), 1);
        loader.load(dir.path().join("b"), &layout()).expect("imported");
        assert!(loader.textures().is_empty());
    }
}
