//! Built-in test cases for demo mode.

use serde_json::json;
use testlist_view::TestDescriptor;

fn descriptor(name: &str, package: &str, kind: &str, last_modified: u64) -> TestDescriptor {
    let mut test = TestDescriptor::new(name, package);
    test.extra.insert("type".into(), json!(kind));
    test.extra.insert("lastModified".into(), json!(last_modified));
    test
}

/// Demo collection: a default-package test plus a few packages.
pub fn demo_tests() -> Vec<TestDescriptor> {
    vec![
        descriptor("FooTest", "", "XML", 1_370_044_800_000),
        descriptor("BarTest", "com.consol.citrus", "XML", 1_370_131_200_000),
        descriptor("LoginTest", "com.consol.citrus.auth", "JAVA", 1_370_217_600_000),
        descriptor("LogoutTest", "com.consol.citrus.auth", "JAVA", 1_370_304_000_000),
        descriptor("SendMessageIT", "com.consol.citrus.jms", "XML", 1_370_390_400_000),
        descriptor("ReceiveMessageIT", "com.consol.citrus.jms", "XML", 1_370_476_800_000),
        descriptor("SoapFaultIT", "com.consol.citrus.ws", "XML", 1_370_563_200_000),
        descriptor("HttpServerIT", "com.consol.citrus.http", "JAVA", 1_370_649_600_000),
    ]
}
