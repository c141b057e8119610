/// Skip a test if live ECR settings are not configured.
#[macro_export]
macro_rules! skip_without_ecr {
    () => {
        for name in [
            "ECR_LOGIN_TEST_KEY",
            "ECR_LOGIN_TEST_SECRET",
            "ECR_LOGIN_TEST_REGION",
            "ECR_LOGIN_TEST_REGISTRY",
        ] {
            if std::env::var(name).is_err() {
                eprintln!("SKIPPED: {} not set", name);
                return;
            }
        }
    };
}
