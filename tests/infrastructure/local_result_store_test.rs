use sentiscribe::application::ports::ResultStore;
use sentiscribe::infrastructure::storage::LocalResultStore;

#[tokio::test]
async fn persists_exactly_the_given_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    let store = LocalResultStore::new(&path);

    store.persist("Transcript.\nSentiment: neutral.").await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Transcript.\nSentiment: neutral."
    );
}

#[tokio::test]
async fn overwrites_the_previous_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.txt");
    let store = LocalResultStore::new(&path);

    store.persist("first").await.unwrap();
    store.persist("second").await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
}

#[tokio::test]
async fn write_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("result.txt");
    let store = LocalResultStore::new(&path);

    assert!(store.persist("text").await.is_err());
}
