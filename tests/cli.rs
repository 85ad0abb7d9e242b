use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    cargo_bin_cmd!("vg_stub")
}

fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

const DQ_JSON: &str = r#"{
    "chinese": {"name": "勇者鬥惡龍", "sortkey": "Yong Zhe Dou E Long"},
    "foreign": {"lang": "ja", "name": "ドラゴンクエスト", "translit": "Doragon Kuesuto"},
    "release": {"year": 1986, "status": "released"},
    "developer": ["Chunsoft"],
    "publisher": "Enix",
    "genres": ["rpg"]
}"#;

#[test]
fn name_japanese() {
    let v = run_json(&["name", "ja", "テイルズ オブ ファンタジア"]);
    assert_eq!(v["translit"], "Teiruzu obu Fantajia");
    assert_eq!(v["sortkey"], "Teiruzu Obu Fantajia");
    assert_eq!(v["italic"], false);
    assert_eq!(
        v["langx"],
        "{{langx|ja|テイルズ オブ ファンタジア|translit=Teiruzu obu Fantajia}}"
    );
}

#[test]
fn name_chinese_sortkey() {
    let v = run_json(&["name", "zh", "時空幻境"]);
    assert_eq!(v["sortkey"], "Shi Kong Huan Jing");
}

#[test]
fn name_english_flags() {
    let v = run_json(&["name", "en", "Tales of Phantasia", "--lit", "幻想传奇", "--no-italic"]);
    assert_eq!(v["italic"], true);
    assert_eq!(v["langx"], "{{langx|en|Tales of Phantasia|lit=幻想传奇}}");
    assert_eq!(v["efn"], "{{efn|{{langx|en|Tales of Phantasia|lit=幻想传奇}}}}");
}

#[test]
fn genre_lookup_and_list() {
    let v = run_json(&["genre", "rpg"]);
    assert_eq!(v["link"], "[[電子角色扮演遊戲|角色扮演遊戲]]");
    assert_eq!(v["stub"], "{{rpg-videogame-stub}}");

    let all = run_json(&["genre"]);
    assert!(all.as_array().is_some_and(|a| a.len() > 1));
}

#[test]
fn genre_unknown_fails() {
    cmd().args(["genre", "mmo"]).assert().failure();
}

#[test]
fn cite_fallback() {
    cmd()
        .args(["cite", "https://www.example.com/x", "--access-date", "2025-01-02"])
        .assert()
        .success()
        .stdout(contains(
            "<ref>{{Cite web|title=https://www.example.com/x|url=https://www.example.com/x\
             |website=example.com|access-date=2025-01-02}}</ref>",
        ));
}

#[test]
fn join_semi_comma() {
    cmd()
        .args(["join", "--start", "看，", "--end", "！", "天空", "海洋", "大地"])
        .assert()
        .success()
        .stdout("看，天空、海洋、大地！\n");
}

#[test]
fn join_bad_punct() {
    cmd().args(["join", "--punct", "colon", "a"]).assert().failure();
}

#[test]
fn build_single_file_to_stdout() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("dq.json");
    fs::write(&path, DQ_JSON).expect("write article");

    cmd()
        .arg("build")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("是一款由Chunsoft開發，Enix發行的[[電子角色扮演遊戲|角色扮演遊戲]]。"))
        .stdout(contains("[[Category:1986年电子游戏|Yong Zhe Dou E Long]]"));
}

#[test]
fn build_directory_writes_files() {
    let tmp = TempDir::new().expect("temp dir");
    let input = tmp.path().join("articles");
    let out = tmp.path().join("out");
    fs::create_dir_all(&input).expect("create input dir");
    fs::write(input.join("dq.json"), DQ_JSON).expect("write article");
    fs::write(input.join("empty.json"), "{}").expect("write article");
    fs::write(input.join("notes.txt"), "ignored").expect("write note");

    cmd()
        .arg("build")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success();

    let dq = fs::read_to_string(out.join("dq.wiki")).expect("dq.wiki written");
    assert!(dq.contains("{{rpg-videogame-stub}}"));
    let empty = fs::read_to_string(out.join("empty.wiki")).expect("empty.wiki written");
    assert!(empty.contains("{{videogame-stub}}"));
    assert!(!out.join("notes.wiki").exists());
}

#[test]
fn build_bad_json_fails() {
    let tmp = TempDir::new().expect("temp dir");
    let path = tmp.path().join("bad.json");
    fs::write(&path, "{").expect("write article");
    cmd().arg("build").arg(&path).assert().failure();
}

#[test]
fn name_blank_fails() {
    cmd()
        .args(["name", "ja", "　"])
        .assert()
        .failure()
        .stderr(contains("empty title"));
}

#[cfg(unix)]
#[test]
fn build_unreadable_directory_warns() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().expect("temp dir");
    let input = tmp.path().join("locked");
    fs::create_dir_all(&input).expect("create input dir");
    fs::write(input.join("dq.json"), DQ_JSON).expect("write article");
    fs::set_permissions(&input, fs::Permissions::from_mode(0o000)).expect("lock dir");

    // Permission bits don't apply to root.
    let readable = fs::read_dir(&input).is_ok();
    let assert = cmd()
        .arg("build")
        .arg(&input)
        .arg("--out-dir")
        .arg(tmp.path().join("out"))
        .assert();
    fs::set_permissions(&input, fs::Permissions::from_mode(0o755)).expect("unlock dir");

    if !readable {
        assert.stderr(contains("skipping unreadable entry"));
    }
}
