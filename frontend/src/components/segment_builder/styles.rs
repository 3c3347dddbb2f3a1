/// Stylesheet for the segment builder popup, injected once per mount.
pub const POPUP_CSS: &str = r#"
.popup-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.45);
    z-index: 900;
}
.popup {
    position: fixed;
    top: 0;
    right: 0;
    width: 480px;
    max-width: 100vw;
    height: 100vh;
    background: #fff;
    display: flex;
    flex-direction: column;
    z-index: 901;
    font-family: Arial, sans-serif;
}
.popup .header {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 16px;
    background: #39aebc;
    color: #fff;
}
.popup .back-btn {
    background: none;
    border: none;
    color: #fff;
    cursor: pointer;
}
.popup-inner {
    flex: 1;
    overflow-y: auto;
    padding: 16px;
}
.input-box {
    display: flex;
    flex-direction: column;
    gap: 8px;
}
.input-box input {
    padding: 8px;
    border: 1px solid #ccc;
    border-radius: 4px;
}
.tasks {
    display: flex;
    justify-content: flex-end;
    gap: 16px;
    font-size: 12px;
}
.dot {
    display: inline-block;
    width: 8px;
    height: 8px;
    margin-right: 4px;
    border-radius: 50%;
}
.dot.green { background: #5bd75b; }
.dot.red { background: #d7385b; }
.dropdown-box {
    border: 2px solid #d6e8f8;
    border-radius: 4px;
    margin: 12px 0;
}
.dropdown-box:empty {
    display: none;
}
.blue-box-wrapper {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 6px;
}
.blue-box-control-wrapper {
    flex: 1;
}
.selected-schema {
    width: 100%;
    padding: 8px;
    border: 1px solid #ccc;
    border-radius: 4px;
}
.remove-btn {
    background: #f2fbf9;
    border: none;
    border-radius: 4px;
    cursor: pointer;
}
.add-new {
    background: none;
    border: none;
    color: #39aebc;
    text-decoration: underline;
    cursor: pointer;
    padding: 8px 0;
}
.btns-wrapper {
    display: flex;
    gap: 12px;
    padding: 16px;
    background: #f6f6f6;
}
.save-btn {
    background: #41b494;
    color: #fff;
    border: none;
    border-radius: 4px;
    padding: 10px 16px;
    cursor: pointer;
}
.cancel-btn {
    background: #fff;
    color: #d7385b;
    border: none;
    border-radius: 4px;
    padding: 10px 16px;
    cursor: pointer;
}
"#;
