use std::path::Path;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(veld_parser)");
    println!("cargo:rustc-check-cfg=cfg(veld_node_types)");

    println!("cargo:rerun-if-changed=grammar.js");
    println!("cargo:rerun-if-changed=src/parser.c");
    println!("cargo:rerun-if-changed=src/scanner.c");
    println!("cargo:rerun-if-changed=src/node-types.json");

    let src_dir = Path::new("src");

    if src_dir.join("node-types.json").exists() {
        println!("cargo:rustc-cfg=veld_node_types");
    }

    let parser_path = src_dir.join("parser.c");
    if !parser_path.exists() {
        println!(
            "cargo:warning=src/parser.c not found; run `tree-sitter generate` to link the veld grammar"
        );
        return;
    }

    let mut c_config = cc::Build::new();
    c_config.std("c11").include(src_dir);
    c_config
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs");

    c_config.file(&parser_path);

    let scanner_path = src_dir.join("scanner.c");
    if scanner_path.exists() {
        c_config.file(&scanner_path);
    }

    c_config.compile("tree-sitter-veld");
    println!("cargo:rustc-cfg=veld_parser");
}
