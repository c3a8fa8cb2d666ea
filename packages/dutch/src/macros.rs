#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!(
                    $env,
                    "Error {} thrown at {}:{}: {}",
                    error_code,
                    file!(),
                    line!(),
                    error_code.reason()
                );
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                soroban_sdk::log!(
                    $env,
                    "Error {} thrown at {}:{}: {}",
                    error_code,
                    file!(),
                    line!(),
                    error_code.reason()
                );
                soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($env:expr, $struct:expr, $value:expr) => {{
        $struct = $crate::math::safe_math::SafeMath::safe_add($struct, $value, $env)?
    }};
}
