//! Provider logos as inline SVG markup
//!
//! Each constant is a complete `<svg>` element sized in `em` so it scales
//! with the button font. XSUAA ships without a logo.

pub const GITHUB: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24"><path fill="black" d="M12 2A10 10 0 0 0 2 12c0 4.42 2.87 8.17 6.84 9.5c.5.08.66-.23.66-.5v-1.69c-2.77.6-3.36-1.34-3.36-1.34c-.46-1.16-1.11-1.47-1.11-1.47c-.91-.62.07-.6.07-.6c1 .07 1.53 1.03 1.53 1.03c.87 1.52 2.34 1.07 2.91.83c.09-.65.35-1.09.63-1.34c-2.22-.25-4.55-1.11-4.55-4.92c0-1.11.38-2 1.03-2.71c-.1-.25-.45-1.29.1-2.64c0 0 .84-.27 2.75 1.02c.79-.22 1.65-.33 2.5-.33s1.71.11 2.5.33c1.91-1.29 2.75-1.02 2.75-1.02c.55 1.35.2 2.39.1 2.64c.65.71 1.03 1.6 1.03 2.71c0 3.82-2.34 4.66-4.57 4.91c.36.31.69.92.69 1.85V21c0 .27.16.59.67.5C19.14 20.16 22 16.42 22 12A10 10 0 0 0 12 2"/></svg>"#;

pub const GOOGLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg"  viewBox="0 0 48 48" width="48px" height="48px"><path fill="#fbc02d" d="M43.611,20.083H42V20H24v8h11.303c-1.649,4.657-6.08,8-11.303,8c-6.627,0-12-5.373-12-12 s5.373-12,12-12c3.059,0,5.842,1.154,7.961,3.039l5.657-5.657C34.046,6.053,29.268,4,24,4C12.955,4,4,12.955,4,24s8.955,20,20,20 s20-8.955,20-20C44,22.659,43.862,21.35,43.611,20.083z"/><path fill="#e53935" d="M6.306,14.691l6.571,4.819C14.655,15.108,18.961,12,24,12c3.059,0,5.842,1.154,7.961,3.039 l5.657-5.657C34.046,6.053,29.268,4,24,4C16.318,4,9.656,8.337,6.306,14.691z"/><path fill="#4caf50" d="M24,44c5.166,0,9.86-1.977,13.409-5.192l-6.19-5.238C29.211,35.091,26.715,36,24,36 c-5.202,0-9.619-3.317-11.283-7.946l-6.522,5.025C9.505,39.556,16.227,44,24,44z"/><path fill="#1565c0" d="M43.611,20.083L43.595,20L42,20H24v8h11.303c-0.792,2.237-2.231,4.166-4.087,5.571 c0.001-0.001,0.002-0.001,0.003-0.002l6.19,5.238C36.971,39.205,44,34,44,24C44,22.659,43.862,21.35,43.611,20.083z"/></svg>"##;

pub const FACEBOOK: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 256 256"><path fill="#1877f2" d="M256 128C256 57.308 198.692 0 128 0S0 57.308 0 128c0 63.888 46.808 116.843 108 126.445V165H75.5v-37H108V99.8c0-32.08 19.11-49.8 48.348-49.8C170.352 50 185 52.5 185 52.5V84h-16.14C152.959 84 148 93.867 148 103.99V128h35.5l-5.675 37H148v89.445c61.192-9.602 108-62.556 108-126.445"/><path fill="#fff" d="m177.825 165l5.675-37H148v-24.01C148 93.866 152.959 84 168.86 84H185V52.5S170.352 50 156.347 50C127.11 50 108 67.72 108 99.8V128H75.5v37H108v89.445A129 129 0 0 0 128 256a129 129 0 0 0 20-1.555V165z"/></svg>"##;

pub const AUTH0: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0.9em" height="1em" viewBox="0 0 256 285"><path d="M220.412 0h-92.415l28.562 89.006h92.416l-74.77 53.077l28.57 89.511c48.128-35.06 63.854-88.12 46.208-142.588zM7.018 89.006h92.416L127.997 0H35.589zc-17.655 54.468-1.92 107.529 46.207 142.588l28.563-89.51zm46.208 142.588l74.77 52.97l74.77-52.97l-74.77-53.847z"/></svg>"#;

pub const BATTLE_NET: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24"><path fill="black" d="M18.94 8.296C15.9 6.892 11.534 6 7.426 6.332c.206-1.36.714-2.308 1.548-2.508c1.148-.275 2.4.48 3.594 1.854c.782.102 1.71.28 2.355.429C12.747 2.013 9.828-.282 7.607.565c-1.688.644-2.553 2.97-2.448 6.094c-2.2.468-3.915 1.3-5.013 2.495c-.056.065-.181.227-.137.305c.034.058.146-.008.194-.04c1.274-.89 2.904-1.373 5.027-1.676c.303 3.333 1.713 7.56 4.055 10.952c-1.28.502-2.356.536-2.946-.087c-.812-.856-.784-2.318-.19-4.04a27 27 0 0 1-.807-2.254c-2.459 3.934-2.986 7.61-1.143 9.11c1.402 1.14 3.847.725 6.502-.926c1.505 1.672 3.083 2.74 4.667 3.094c.084.015.287.043.332-.034c.034-.06-.08-.124-.131-.149c-1.408-.657-2.64-1.828-3.964-3.515c2.735-1.929 5.691-5.263 7.457-8.988c1.076.86 1.64 1.773 1.398 2.595c-.336 1.131-1.615 1.84-3.403 2.185a28 28 0 0 1-1.548 1.826c4.634.16 8.08-1.22 8.458-3.565c.286-1.786-1.295-3.696-4.053-5.17c.696-2.139.832-4.04.346-5.588c-.029-.08-.106-.27-.196-.27c-.068 0-.067.13-.063.187c.135 1.547-.263 3.2-1.062 5.19zm-8.533 9.869c-1.96-3.145-3.09-6.849-3.082-10.594c3.702-.124 7.474.748 10.714 2.627c-1.743 3.269-4.385 6.1-7.633 7.966z"/></svg>"#;

pub const COGNITO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 256 256"><defs><linearGradient id="logosAwsCognito0" x1="0%" x2="100%" y1="100%" y2="0%"><stop offset="0%" stop-color="#bd0816"/><stop offset="100%" stop-color="#ff5252"/></linearGradient></defs><path fill="url(#logosAwsCognito0)" d="M0 0h256v256H0z"/><path fill="#fff" d="M54.283 114.585H95.58v-6.344H54.283zm142.119 46.154l4.491 4.485l-23.59 23.556a3.18 3.18 0 0 1-4.491 0l-11.868-11.848l4.491-4.485l9.623 9.605zm14.619 17.481c-.725 5.964-3.152 11.511-7.03 16.048a30.6 30.6 0 0 1-10.058 7.701a30 30 0 0 1-16.506 2.665a30.05 30.05 0 0 1-15.06-6.29c-8.33-6.614-12.535-16.87-11.255-27.436a30.3 30.3 0 0 1 16.185-23.301a29.9 29.9 0 0 1 13.726-3.337c1.223 0 2.456.076 3.685.225c9.962 1.215 18.65 7.302 23.231 16.282a30.24 30.24 0 0 1 3.082 17.443m2.58-20.32c-5.544-10.868-16.059-18.233-28.124-19.702a36.25 36.25 0 0 0-21.096 3.772a36.64 36.64 0 0 0-19.578 28.177c-1.544 12.768 3.542 25.167 13.612 33.164a36.4 36.4 0 0 0 18.24 7.62q2.221.27 4.438.269a36.3 36.3 0 0 0 15.566-3.502a36.9 36.9 0 0 0 12.163-9.313c4.692-5.488 7.634-12.197 8.508-19.404a36.54 36.54 0 0 0-3.73-21.081M86.05 133.618h12.706v-6.344H86.05zm-31.768 0h25.414v-6.344H54.283zM51.54 51.144h142.086c3.742 0 6.786 3.702 6.786 8.25v23.47h-9.53v-15.86a3.173 3.173 0 0 0-3.177-3.172H114.64a3.173 3.173 0 0 0-3.176 3.172v15.86h-66.71v-23.47c0-4.472 3.11-8.25 6.785-8.25m99.68 30.8c7.377 0 13.378 5.933 13.378 13.222c0 4.806-2.653 9.228-6.922 11.543a13.6 13.6 0 0 1-12.939.003c-4.253-2.322-6.893-6.744-6.893-11.546c0-7.29 5.997-13.221 13.377-13.221M44.754 150.748V89.209h66.71v53.925a3.17 3.17 0 0 0 3.177 3.172h33.21v-6.344h-26.532c.276-12.695 8.716-23.66 20.87-27.163c5.617 2.624 12.323 2.65 18.025-.003c6.919 1.999 12.973 6.62 16.725 12.815l5.435-3.286c-3.85-6.347-9.692-11.302-16.467-14.182c3.176-3.521 5.044-8.102 5.044-12.977c0-10.788-8.853-19.565-19.73-19.565c-10.88 0-19.73 8.777-19.73 19.565c0 4.856 1.848 9.421 5.003 12.942a35.17 35.17 0 0 0-18.676 18.525V70.176h66.71v50.753h6.354V89.21h9.53l.003 47.58h6.353l-.003-77.394c0-8.048-5.893-14.595-13.139-14.595H51.54c-7.246 0-13.139 6.547-13.139 14.595v91.352c0 8.047 5.893 14.591 13.139 14.591h85.338v-6.344H51.539c-3.676 0-6.786-3.775-6.786-8.247"/></svg>"##;

pub const DISCORD: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1.29em" height="1em" viewBox="0 0 256 199"><path fill="#5865f2" d="M216.856 16.597A208.5 208.5 0 0 0 164.042 0c-2.275 4.113-4.933 9.645-6.766 14.046q-29.538-4.442-58.533 0c-1.832-4.4-4.55-9.933-6.846-14.046a207.8 207.8 0 0 0-52.855 16.638C5.618 67.147-3.443 116.4 1.087 164.956c22.169 16.555 43.653 26.612 64.775 33.193A161 161 0 0 0 79.735 175.3a136.4 136.4 0 0 1-21.846-10.632a109 109 0 0 0 5.356-4.237c42.122 19.702 87.89 19.702 129.51 0a132 132 0 0 0 5.355 4.237a136 136 0 0 1-21.886 10.653c4.006 8.02 8.638 15.67 13.873 22.848c21.142-6.58 42.646-16.637 64.815-33.213c5.316-56.288-9.08-105.09-38.056-148.36M85.474 135.095c-12.645 0-23.015-11.805-23.015-26.18s10.149-26.2 23.015-26.2s23.236 11.804 23.015 26.2c.02 14.375-10.148 26.18-23.015 26.18m85.051 0c-12.645 0-23.014-11.805-23.014-26.18s10.148-26.2 23.014-26.2c12.867 0 23.236 11.804 23.015 26.2c0 14.375-10.148 26.18-23.015 26.18"/></svg>"##;

pub const KEYCLOAK: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24"><path fill="black" d="m18.742 1.182l-12.493.002C4.155 4.784 2.079 8.393 0 12.002c2.071 3.612 4.162 7.214 6.252 10.816l12.49-.004l3.089-5.404h2.158v-.002H24L23.996 6.59h-2.168zM8.327 4.792h2.081l1.04 1.8l-3.12 5.413l3.117 5.403l-1.035 1.81H8.327a2048 2048 0 0 0-4.168-7.204zm6.241 0l2.086.003q2.088 3.608 4.166 7.222l-4.167 7.2h-2.08c-.382-.562-1.038-1.808-1.038-1.808l3.123-5.405l-3.124-5.413z"/></svg>"#;

pub const LINKEDIN: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 128 128"><path fill="#0076b2" d="M116 3H12a8.91 8.91 0 0 0-9 8.8v104.42a8.91 8.91 0 0 0 9 8.78h104a8.93 8.93 0 0 0 9-8.81V11.77A8.93 8.93 0 0 0 116 3"/><path fill="#fff" d="M21.06 48.73h18.11V107H21.06zm9.06-29a10.5 10.5 0 1 1-10.5 10.49a10.5 10.5 0 0 1 10.5-10.49m20.41 29h17.36v8h.24c2.42-4.58 8.32-9.41 17.13-9.41C103.6 47.28 107 59.35 107 75v32H88.89V78.65c0-6.75-.12-15.44-9.41-15.44s-10.87 7.36-10.87 15V107H50.53z"/></svg>"##;

pub const MICROSOFT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 256 256"><path fill="#f1511b" d="M121.666 121.666H0V0h121.666z"/><path fill="#80cc28" d="M256 121.666H134.335V0H256z"/><path fill="#00adef" d="M121.663 256.002H0V134.336h121.663z"/><path fill="#fbbc09" d="M256 256.002H134.335V134.336H256z"/></svg>"##;

pub const PAYPAL: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="0.85em" height="1em" viewBox="0 0 256 302"><path fill="#27346a" d="M217.168 23.507C203.234 7.625 178.046.816 145.823.816h-93.52A13.39 13.39 0 0 0 39.076 12.11L.136 259.077c-.774 4.87 2.997 9.28 7.933 9.28h57.736l14.5-91.971l-.45 2.88c1.033-6.501 6.593-11.296 13.177-11.296h27.436c53.898 0 96.101-21.892 108.429-85.221c.366-1.873.683-3.696.957-5.477q-2.334-1.236 0 0c3.671-23.407-.025-39.34-12.686-53.765"/><path fill="#27346a" d="M102.397 68.84a11.7 11.7 0 0 1 5.053-1.14h73.318c8.682 0 16.78.565 24.18 1.756a102 102 0 0 1 6.177 1.182a90 90 0 0 1 8.59 2.347c3.638 1.215 7.026 2.63 10.14 4.287c3.67-23.416-.026-39.34-12.687-53.765C203.226 7.625 178.046.816 145.823.816H52.295C45.71.816 40.108 5.61 39.076 12.11L.136 259.068c-.774 4.878 2.997 9.282 7.925 9.282h57.744L95.888 77.58a11.72 11.72 0 0 1 6.509-8.74"/><path fill="#2790c3" d="M228.897 82.749c-12.328 63.32-54.53 85.221-108.429 85.221H93.024c-6.584 0-12.145 4.795-13.168 11.296L61.817 293.621c-.674 4.262 2.622 8.124 6.934 8.124h48.67a11.71 11.71 0 0 0 11.563-9.88l.474-2.48l9.173-58.136l.591-3.213a11.71 11.71 0 0 1 11.562-9.88h7.284c47.147 0 84.064-19.154 94.852-74.55c4.503-23.15 2.173-42.478-9.739-56.054c-3.613-4.112-8.1-7.508-13.327-10.28c-.283 1.79-.59 3.604-.957 5.477"/><path fill="#1f264f" d="M216.952 72.128a90 90 0 0 0-5.818-1.49a110 110 0 0 0-6.177-1.174c-7.408-1.199-15.5-1.765-24.19-1.765h-73.309a11.6 11.6 0 0 0-5.053 1.149a11.68 11.68 0 0 0-6.51 8.74l-15.582 98.798l-.45 2.88c1.025-6.501 6.585-11.296 13.17-11.296h27.444c53.898 0 96.1-21.892 108.428-85.221c.367-1.873.675-3.688.958-5.477q-4.682-2.47-10.14-4.279a83 83 0 0 0-2.77-.865"/></svg>"##;

pub const SPOTIFY: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 256 256"><path fill="#1ed760" d="M128 0C57.308 0 0 57.309 0 128c0 70.696 57.309 128 128 128c70.697 0 128-57.304 128-128C256 57.314 198.697.007 127.998.007zm58.699 184.614c-2.293 3.76-7.215 4.952-10.975 2.644c-30.053-18.357-67.885-22.515-112.44-12.335a7.98 7.98 0 0 1-9.552-6.007a7.97 7.97 0 0 1 6-9.553c48.76-11.14 90.583-6.344 124.323 14.276c3.76 2.308 4.952 7.215 2.644 10.975m15.667-34.853c-2.89 4.695-9.034 6.178-13.726 3.289c-34.406-21.148-86.853-27.273-127.548-14.92c-5.278 1.594-10.852-1.38-12.454-6.649c-1.59-5.278 1.386-10.842 6.655-12.446c46.485-14.106 104.275-7.273 143.787 17.007c4.692 2.89 6.175 9.034 3.286 13.72zm1.345-36.293C162.457 88.964 94.394 86.71 55.007 98.666c-6.325 1.918-13.014-1.653-14.93-7.978c-1.917-6.328 1.65-13.012 7.98-14.935C93.27 62.027 168.434 64.68 215.929 92.876c5.702 3.376 7.566 10.724 4.188 16.405c-3.362 5.69-10.73 7.565-16.4 4.187z"/></svg>"##;

pub const STEAM: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24"><path fill="black" d="M21.928 9.49v2.071h-1.503v1.503h1.503v-1.5H24V9.49zm-5.915.498v1.075h1.075V9.988zm2.326 2.572a.6.6 0 0 0-.382.144a.5.5 0 0 0-.155.383a.44.44 0 0 0 .145.35a.63.63 0 0 0 .33.14l.103.015l.112.02a1 1 0 0 1 .163.037a.4.4 0 0 1 .102.065a.34.34 0 0 1 .1.268a.35.35 0 0 1-.127.29a.53.53 0 0 1-.347.105a.7.7 0 0 1-.285-.05a.8.8 0 0 1-.24-.175l-.098.102a.8.8 0 0 0 .27.193a.9.9 0 0 0 .343.06a.68.68 0 0 0 .455-.144a.5.5 0 0 0 .175-.39a.5.5 0 0 0-.043-.208a.4.4 0 0 0-.12-.16a.5.5 0 0 0-.13-.08a.8.8 0 0 0-.2-.047l-.112-.02l-.088-.013a1 1 0 0 1-.152-.045a.5.5 0 0 1-.123-.072a.32.32 0 0 1-.095-.25a.38.38 0 0 1 .115-.287a.44.44 0 0 1 .313-.105a.6.6 0 0 1 .252.045a.8.8 0 0 1 .195.132l.09-.092a.7.7 0 0 0-.53-.21zm-17.664.005a.67.67 0 0 0-.432.161a.54.54 0 0 0-.175.42a.52.52 0 0 0 .132.375a.6.6 0 0 0 .359.157l.12.015l.105.015a.28.28 0 0 1 .172.076a.23.23 0 0 1 .05.155q0 .238-.327.237a.8.8 0 0 1-.251-.037a.5.5 0 0 1-.195-.123l-.233.24a.76.76 0 0 0 .295.195a1.2 1.2 0 0 0 .38.058a.76.76 0 0 0 .492-.156a.53.53 0 0 0 .193-.431a.54.54 0 0 0-.143-.405a.5.5 0 0 0-.145-.093a1 1 0 0 0-.21-.052l-.107-.015l-.113-.015a.3.3 0 0 1-.167-.078a.2.2 0 0 1-.058-.135a.22.22 0 0 1 .075-.172a.3.3 0 0 1 .213-.068a.8.8 0 0 1 .205.027a.4.4 0 0 1 .172.105l.228-.232a.7.7 0 0 0-.26-.17a1 1 0 0 0-.338-.053H.675zm12.091.003a.6.6 0 0 0-.238.05a.7.7 0 0 0-.21.146a.5.5 0 0 0-.097.134a.6.6 0 0 0-.05.153a1.4 1.4 0 0 0-.02.19a8 8 0 0 0 0 .595a1.3 1.3 0 0 0 .02.19a.6.6 0 0 0 .05.152a.5.5 0 0 0 .097.135a.7.7 0 0 0 .21.145a.7.7 0 0 0 .251.05a.6.6 0 0 0 .251-.05a.7.7 0 0 0 .21-.145a.5.5 0 0 0 .097-.135a.6.6 0 0 0 .05-.152a1.4 1.4 0 0 0 .02-.19a8 8 0 0 0 0-.595a1.3 1.3 0 0 0-.02-.19a.6.6 0 0 0-.05-.153a.5.5 0 0 0-.097-.134a.7.7 0 0 0-.21-.146a.7.7 0 0 0-.25-.05zm-10.949.015v.333H2.3v1.575h.36v-1.575h.482v-.333zm1.878 0v1.908h1.218v-.33h-.855v-.464h.727v-.333h-.727v-.448h.855v-.333zm2.298 0l-.673 1.908h.375l.113-.337h.655l.11.337h.377l-.675-1.908zm1.442 0v1.908h.36v-1.11l.355.722h.245l.352-.722v1.11h.36v-1.908h-.354l-.48 1.03l-.483-1.03zm2.198 0l.46 1.908h.144l.437-1.66l.435 1.66h.143l.46-1.908h-.147l-.39 1.658l-.43-1.658H10.6l-.43 1.658l-.39-1.658zm4.452 0v1.908h.14v-.882h.508l.44.882h.162l-.445-.882a.49.49 0 0 0 .428-.516a.5.5 0 0 0-.148-.374a.55.55 0 0 0-.382-.136zm1.93 0v1.908h.14v-.515l.44-.553l.593 1.068v-.002h.167l-.667-1.177l.57-.728h-.168l-.935 1.192v-1.192zm3.188.033v.19h.026v-.128l.045.093h.024l.042-.093v.128h.028v-.19h-.028l-.055.118l-.055-.118zm-.165.002v.025h.052v.163h.028v-.163h.052v-.025zm-6.26.08a.5.5 0 0 1 .352.148a.5.5 0 0 1 .077.107a.5.5 0 0 1 .043.132a1 1 0 0 1 .018.175a8 8 0 0 1 0 .556a1 1 0 0 1-.018.175a.5.5 0 0 1-.043.132a.5.5 0 0 1-.077.107a.49.49 0 0 1-.7 0a.5.5 0 0 1-.078-.107a.6.6 0 0 1-.042-.132a1 1 0 0 1-.018-.175a8 8 0 0 1 0-.556a1 1 0 0 1 .018-.175a.5.5 0 0 1 .042-.132a.5.5 0 0 1 .078-.107a.5.5 0 0 1 .349-.148zm2.007.015a.43.43 0 0 1 .28.098a.35.35 0 0 1 .11.289a.36.36 0 0 1-.113.286a.43.43 0 0 1-.294.098h-.543v-.77h.545zm-8.643.433l.228.692h-.46z"/></svg>"#;

pub const TWITCH: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="0.96em" height="1em" viewBox="0 0 256 268"><path fill="#5a3e85" d="M17.458 0L0 46.556v186.201h63.983v34.934h34.931l34.898-34.934h52.36L256 162.954V0zm23.259 23.263H232.73v128.029l-40.739 40.741H128L93.113 226.92v-34.886H40.717zm64.008 116.405H128V69.844h-23.275zm63.997 0h23.27V69.844h-23.27z"/></svg>"##;

pub const X: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 128 128"><path d="M75.916 54.2L122.542 0h-11.05L71.008 47.06L38.672 0H1.376l48.898 71.164L1.376 128h11.05L55.18 78.303L89.328 128h37.296L75.913 54.2ZM60.782 71.79l-4.955-7.086l-39.42-56.386h16.972L65.19 53.824l4.954 7.086l41.353 59.15h-16.97L60.782 71.793Z"/></svg>"#;

pub const YANDEX: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 16 16"><path fill="currentColor" fill-rule="evenodd" d="M13.5 8a5.5 5.5 0 1 1-11 0a5.5 5.5 0 0 1 11 0M15 8A7 7 0 1 1 1 8a7 7 0 0 1 14 0M6.136 5.103a.75.75 0 0 0-1.272.795l2.044 3.27c.223.357.342.77.342 1.192v1.14a.75.75 0 0 0 1.5 0v-1.14a3.75 3.75 0 0 0-.57-1.987zm5 .795a.75.75 0 1 0-1.272-.795L8.77 6.853a.75.75 0 0 0 1.272.795z" clip-rule="evenodd"/></svg>"#;

pub const XSUAA: &str = "";

pub const LOADING: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1em" height="1em" viewBox="0 0 24 24"><path fill="none" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 12a9 9 0 1 1-6.219-8.56"/></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logos_are_svg_elements() {
        for icon in [AUTH0, BATTLE_NET, COGNITO, DISCORD, FACEBOOK, GITHUB, GOOGLE, KEYCLOAK] {
            assert!(icon.starts_with("<svg"));
            assert!(icon.ends_with("</svg>"));
        }
        for icon in [LINKEDIN, MICROSOFT, PAYPAL, SPOTIFY, STEAM, TWITCH, X, YANDEX, LOADING] {
            assert!(icon.starts_with("<svg"));
            assert!(icon.ends_with("</svg>"));
        }
    }

    #[test]
    fn xsuaa_has_no_logo() {
        assert!(XSUAA.is_empty());
    }
}
