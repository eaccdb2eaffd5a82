use std::path::{Path, PathBuf};
use std::process::Command;

fn create_dir(dest_path: &Path) {
    print!("creating directory: {:?} ", dest_path);
    match std::fs::create_dir(dest_path) {
        Ok(()) => println!("success"),
        Err(err) => println!("error: {:?}", err),
    }
}

fn main() {
    println!("cargo:rerun-if-changed=res");

    let mut dest_path = std::env::current_exe().unwrap();
    dest_path.pop();
    dest_path.pop();
    dest_path.pop();
    dest_path.pop();
    dest_path.push("translations");
    create_dir(&dest_path);
    dest_path.push("cursive");
    create_dir(&dest_path);
    println!(
        "cargo:rustc-env=TRANSLATION_INPUT_PATH={}",
        dest_path.display()
    );

    let dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap()).join("res");

    let po_glob = dir.join("**/*.po");
    let existing_iter = glob::glob(&po_glob.to_string_lossy()).unwrap();

    for existing_file in existing_iter.flatten() {
        let filename = existing_file
            .with_extension("mo")
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_string();

        print!(
            "generating .mo file for {:?} to {}/{} ",
            &existing_file,
            dest_path.display(),
            &filename
        );
        let res = Command::new("msgfmt")
            .arg(format!("--output-file={}/{}", dest_path.display(), &filename))
            .arg(format!("{}", &existing_file.display()))
            .output();

        match res {
            Ok(_) => println!("success"),
            Err(err) => println!("error: {:?}", err),
        }
    }
}
