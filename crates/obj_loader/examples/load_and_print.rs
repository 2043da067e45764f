//! Load an OBJ file from disk and print a summary of its contents.
//!
//! Usage: `cargo run --example load_and_print -- path/to/model.obj`

use obj_loader::Loader;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "model.obj".to_string());

    let mut loader = Loader::new();
    match loader.load_file(&path) {
        Ok(result) => {
            for (i, mesh) in result.meshes.iter().enumerate() {
                println!("Mesh {i}: {}", mesh.name);
                println!("  vertices:  {}", mesh.vertices.len());
                println!("  triangles: {}", mesh.triangle_count());
                if !mesh.material.name.is_empty() {
                    println!("  material:  {}", mesh.material.name);
                }
            }
            println!(
                "total: {} vertices, {} indices, {} material(s)",
                result.vertices.len(),
                result.indices.len(),
                result.materials.len()
            );
        }
        Err(err) => {
            eprintln!("failed to load {path}: {err}");
            std::process::exit(1);
        }
    }
}
