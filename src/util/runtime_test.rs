// Tests for the runtime module

use super::*;

#[test]
fn test_run_async_executes_simple_future() {
    let result = run_async(async { 42 }).expect("runtime available");
    assert_eq!(result, 42);
}

#[test]
fn test_run_async_propagates_values() {
    let data = vec![1, 2, 3];
    let sum = run_async(async move { data.iter().sum::<i32>() }).expect("runtime available");
    assert_eq!(sum, 6);
}

#[test]
fn test_run_async_with_tokio_sleep() {
    let start = std::time::Instant::now();
    run_async(async {
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    })
    .expect("runtime available");
    assert!(start.elapsed() >= std::time::Duration::from_millis(10));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_run_async_inside_multi_thread_runtime() {
    let result = run_async(async { "inside" }).expect("block_in_place allowed");
    assert_eq!(result, "inside");
}

#[tokio::test]
async fn test_run_async_rejects_current_thread_runtime() {
    let result = run_async(async { 1 });
    assert!(result.is_err());
}
