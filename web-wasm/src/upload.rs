//! 画像ファイルの読み込み（プレビュー用Data URL生成）

use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

/// 画像ファイルをData URLとして読み込み、完了時にコールバックする
pub fn read_image_preview<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let file_name = file.name();
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            gloo::console::error!("FileReader unavailable", e);
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result().ok().and_then(|r| r.as_string()) {
            Some(data_url) => on_loaded(data_url),
            None => gloo::console::warn!(format!("画像を読み込めませんでした: {}", file_name)),
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        gloo::console::error!("read_as_data_url failed", e);
    }
}
