#![allow(dead_code)]

use std::fs;
use std::io::Error;
use std::path::Path;

/// Writes an XML plist catalog of `(key, price, quantity)` entries.
pub fn write_plist_catalog(path: &Path, entries: &[(&str, &str, &str)]) -> Result<(), Error> {
    let mut body = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n\
         <plist version=\"1.0\">\n<dict>\n",
    );
    for (key, price, quantity) in entries {
        body.push_str(&format!(
            "<key>{key}</key>\n<dict>\n<key>price</key>\n<real>{price}</real>\n<key>quantity</key>\n<integer>{quantity}</integer>\n</dict>\n"
        ));
    }
    body.push_str("</dict>\n</plist>\n");
    fs::write(path, body)
}

/// Writes a JSON catalog verbatim.
pub fn write_json_catalog(path: &Path, json: &str) -> Result<(), Error> {
    fs::write(path, json)
}
