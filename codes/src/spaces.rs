//! Code spaces, one per event type that defines codes
//!
//! Names follow `linux/input-event-codes.h`.

code_space! {
    /// Synchronization markers (`EV_SYN`).
    pub struct SynCode;

    SYN_REPORT = 0x0000;
    SYN_CONFIG = 0x0001;
    SYN_MT_REPORT = 0x0002;
    SYN_DROPPED = 0x0003;
    SYN_MAX = 0x000f;
    SYN_CNT = 0x0010;
}

code_space! {
    /// Keys and buttons (`EV_KEY`).
    pub struct KeyCode;

    KEY_RESERVED = 0x0000;
    KEY_ESC = 0x0001;
    KEY_1 = 0x0002;
    KEY_2 = 0x0003;
    KEY_3 = 0x0004;
    KEY_4 = 0x0005;
    KEY_5 = 0x0006;
    KEY_6 = 0x0007;
    KEY_7 = 0x0008;
    KEY_8 = 0x0009;
    KEY_9 = 0x000a;
    KEY_0 = 0x000b;
    KEY_MINUS = 0x000c;
    KEY_EQUAL = 0x000d;
    KEY_BACKSPACE = 0x000e;
    KEY_TAB = 0x000f;
    KEY_Q = 0x0010;
    KEY_W = 0x0011;
    KEY_E = 0x0012;
    KEY_R = 0x0013;
    KEY_T = 0x0014;
    KEY_Y = 0x0015;
    KEY_U = 0x0016;
    KEY_I = 0x0017;
    KEY_O = 0x0018;
    KEY_P = 0x0019;
    KEY_LEFTBRACE = 0x001a;
    KEY_RIGHTBRACE = 0x001b;
    KEY_ENTER = 0x001c;
    KEY_LEFTCTRL = 0x001d;
    KEY_A = 0x001e;
    KEY_S = 0x001f;
    KEY_D = 0x0020;
    KEY_F = 0x0021;
    KEY_G = 0x0022;
    KEY_H = 0x0023;
    KEY_J = 0x0024;
    KEY_K = 0x0025;
    KEY_L = 0x0026;
    KEY_SEMICOLON = 0x0027;
    KEY_APOSTROPHE = 0x0028;
    KEY_GRAVE = 0x0029;
    KEY_LEFTSHIFT = 0x002a;
    KEY_BACKSLASH = 0x002b;
    KEY_Z = 0x002c;
    KEY_X = 0x002d;
    KEY_C = 0x002e;
    KEY_V = 0x002f;
    KEY_B = 0x0030;
    KEY_N = 0x0031;
    KEY_M = 0x0032;
    KEY_COMMA = 0x0033;
    KEY_DOT = 0x0034;
    KEY_SLASH = 0x0035;
    KEY_RIGHTSHIFT = 0x0036;
    KEY_KPASTERISK = 0x0037;
    KEY_LEFTALT = 0x0038;
    KEY_SPACE = 0x0039;
    KEY_CAPSLOCK = 0x003a;
    KEY_F1 = 0x003b;
    KEY_F2 = 0x003c;
    KEY_F3 = 0x003d;
    KEY_F4 = 0x003e;
    KEY_F5 = 0x003f;
    KEY_F6 = 0x0040;
    KEY_F7 = 0x0041;
    KEY_F8 = 0x0042;
    KEY_F9 = 0x0043;
    KEY_F10 = 0x0044;
    KEY_NUMLOCK = 0x0045;
    KEY_SCROLLLOCK = 0x0046;
    KEY_KP7 = 0x0047;
    KEY_KP8 = 0x0048;
    KEY_KP9 = 0x0049;
    KEY_KPMINUS = 0x004a;
    KEY_KP4 = 0x004b;
    KEY_KP5 = 0x004c;
    KEY_KP6 = 0x004d;
    KEY_KPPLUS = 0x004e;
    KEY_KP1 = 0x004f;
    KEY_KP2 = 0x0050;
    KEY_KP3 = 0x0051;
    KEY_KP0 = 0x0052;
    KEY_KPDOT = 0x0053;
    KEY_ZENKAKUHANKAKU = 0x0055;
    KEY_102ND = 0x0056;
    KEY_F11 = 0x0057;
    KEY_F12 = 0x0058;
    KEY_RO = 0x0059;
    KEY_KATAKANA = 0x005a;
    KEY_HIRAGANA = 0x005b;
    KEY_HENKAN = 0x005c;
    KEY_KATAKANAHIRAGANA = 0x005d;
    KEY_MUHENKAN = 0x005e;
    KEY_KPJPCOMMA = 0x005f;
    KEY_KPENTER = 0x0060;
    KEY_RIGHTCTRL = 0x0061;
    KEY_KPSLASH = 0x0062;
    KEY_SYSRQ = 0x0063;
    KEY_RIGHTALT = 0x0064;
    KEY_LINEFEED = 0x0065;
    KEY_HOME = 0x0066;
    KEY_UP = 0x0067;
    KEY_PAGEUP = 0x0068;
    KEY_LEFT = 0x0069;
    KEY_RIGHT = 0x006a;
    KEY_END = 0x006b;
    KEY_DOWN = 0x006c;
    KEY_PAGEDOWN = 0x006d;
    KEY_INSERT = 0x006e;
    KEY_DELETE = 0x006f;
    KEY_MACRO = 0x0070;
    KEY_MUTE | KEY_MIN_INTERESTING = 0x0071;
    KEY_VOLUMEDOWN = 0x0072;
    KEY_VOLUMEUP = 0x0073;
    KEY_POWER = 0x0074;
    KEY_KPEQUAL = 0x0075;
    KEY_KPPLUSMINUS = 0x0076;
    KEY_PAUSE = 0x0077;
    KEY_SCALE = 0x0078;
    KEY_KPCOMMA = 0x0079;
    KEY_HANGEUL | KEY_HANGUEL = 0x007a;
    KEY_HANJA = 0x007b;
    KEY_YEN = 0x007c;
    KEY_LEFTMETA = 0x007d;
    KEY_RIGHTMETA = 0x007e;
    KEY_COMPOSE = 0x007f;
    KEY_STOP = 0x0080;
    KEY_AGAIN = 0x0081;
    KEY_PROPS = 0x0082;
    KEY_UNDO = 0x0083;
    KEY_FRONT = 0x0084;
    KEY_COPY = 0x0085;
    KEY_OPEN = 0x0086;
    KEY_PASTE = 0x0087;
    KEY_FIND = 0x0088;
    KEY_CUT = 0x0089;
    KEY_HELP = 0x008a;
    KEY_MENU = 0x008b;
    KEY_CALC = 0x008c;
    KEY_SETUP = 0x008d;
    KEY_SLEEP = 0x008e;
    KEY_WAKEUP = 0x008f;
    KEY_FILE = 0x0090;
    KEY_SENDFILE = 0x0091;
    KEY_DELETEFILE = 0x0092;
    KEY_XFER = 0x0093;
    KEY_PROG1 = 0x0094;
    KEY_PROG2 = 0x0095;
    KEY_WWW = 0x0096;
    KEY_MSDOS = 0x0097;
    KEY_COFFEE | KEY_SCREENLOCK = 0x0098;
    KEY_ROTATE_DISPLAY | KEY_DIRECTION = 0x0099;
    KEY_CYCLEWINDOWS = 0x009a;
    KEY_MAIL = 0x009b;
    KEY_BOOKMARKS = 0x009c;
    KEY_COMPUTER = 0x009d;
    KEY_BACK = 0x009e;
    KEY_FORWARD = 0x009f;
    KEY_CLOSECD = 0x00a0;
    KEY_EJECTCD = 0x00a1;
    KEY_EJECTCLOSECD = 0x00a2;
    KEY_NEXTSONG = 0x00a3;
    KEY_PLAYPAUSE = 0x00a4;
    KEY_PREVIOUSSONG = 0x00a5;
    KEY_STOPCD = 0x00a6;
    KEY_RECORD = 0x00a7;
    KEY_REWIND = 0x00a8;
    KEY_PHONE = 0x00a9;
    KEY_ISO = 0x00aa;
    KEY_CONFIG = 0x00ab;
    KEY_HOMEPAGE = 0x00ac;
    KEY_REFRESH = 0x00ad;
    KEY_EXIT = 0x00ae;
    KEY_MOVE = 0x00af;
    KEY_EDIT = 0x00b0;
    KEY_SCROLLUP = 0x00b1;
    KEY_SCROLLDOWN = 0x00b2;
    KEY_KPLEFTPAREN = 0x00b3;
    KEY_KPRIGHTPAREN = 0x00b4;
    KEY_NEW = 0x00b5;
    KEY_REDO = 0x00b6;
    KEY_F13 = 0x00b7;
    KEY_F14 = 0x00b8;
    KEY_F15 = 0x00b9;
    KEY_F16 = 0x00ba;
    KEY_F17 = 0x00bb;
    KEY_F18 = 0x00bc;
    KEY_F19 = 0x00bd;
    KEY_F20 = 0x00be;
    KEY_F21 = 0x00bf;
    KEY_F22 = 0x00c0;
    KEY_F23 = 0x00c1;
    KEY_F24 = 0x00c2;
    KEY_PLAYCD = 0x00c8;
    KEY_PAUSECD = 0x00c9;
    KEY_PROG3 = 0x00ca;
    KEY_PROG4 = 0x00cb;
    KEY_DASHBOARD = 0x00cc;
    KEY_SUSPEND = 0x00cd;
    KEY_CLOSE = 0x00ce;
    KEY_PLAY = 0x00cf;
    KEY_FASTFORWARD = 0x00d0;
    KEY_BASSBOOST = 0x00d1;
    KEY_PRINT = 0x00d2;
    KEY_HP = 0x00d3;
    KEY_CAMERA = 0x00d4;
    KEY_SOUND = 0x00d5;
    KEY_QUESTION = 0x00d6;
    KEY_EMAIL = 0x00d7;
    KEY_CHAT = 0x00d8;
    KEY_SEARCH = 0x00d9;
    KEY_CONNECT = 0x00da;
    KEY_FINANCE = 0x00db;
    KEY_SPORT = 0x00dc;
    KEY_SHOP = 0x00dd;
    KEY_ALTERASE = 0x00de;
    KEY_CANCEL = 0x00df;
    KEY_BRIGHTNESSDOWN = 0x00e0;
    KEY_BRIGHTNESSUP = 0x00e1;
    KEY_MEDIA = 0x00e2;
    KEY_SWITCHVIDEOMODE = 0x00e3;
    KEY_KBDILLUMTOGGLE = 0x00e4;
    KEY_KBDILLUMDOWN = 0x00e5;
    KEY_KBDILLUMUP = 0x00e6;
    KEY_SEND = 0x00e7;
    KEY_REPLY = 0x00e8;
    KEY_FORWARDMAIL = 0x00e9;
    KEY_SAVE = 0x00ea;
    KEY_DOCUMENTS = 0x00eb;
    KEY_BATTERY = 0x00ec;
    KEY_BLUETOOTH = 0x00ed;
    KEY_WLAN = 0x00ee;
    KEY_UWB = 0x00ef;
    KEY_UNKNOWN = 0x00f0;
    KEY_VIDEO_NEXT = 0x00f1;
    KEY_VIDEO_PREV = 0x00f2;
    KEY_BRIGHTNESS_CYCLE = 0x00f3;
    KEY_BRIGHTNESS_AUTO | KEY_BRIGHTNESS_ZERO = 0x00f4;
    KEY_DISPLAY_OFF = 0x00f5;
    KEY_WWAN | KEY_WIMAX = 0x00f6;
    KEY_RFKILL = 0x00f7;
    KEY_MICMUTE = 0x00f8;
    BTN_MISC | BTN_0 = 0x0100;
    BTN_1 = 0x0101;
    BTN_2 = 0x0102;
    BTN_3 = 0x0103;
    BTN_4 = 0x0104;
    BTN_5 = 0x0105;
    BTN_6 = 0x0106;
    BTN_7 = 0x0107;
    BTN_8 = 0x0108;
    BTN_9 = 0x0109;
    BTN_MOUSE | BTN_LEFT = 0x0110;
    BTN_RIGHT = 0x0111;
    BTN_MIDDLE = 0x0112;
    BTN_SIDE = 0x0113;
    BTN_EXTRA = 0x0114;
    BTN_FORWARD = 0x0115;
    BTN_BACK = 0x0116;
    BTN_TASK = 0x0117;
    BTN_JOYSTICK | BTN_TRIGGER = 0x0120;
    BTN_THUMB = 0x0121;
    BTN_THUMB2 = 0x0122;
    BTN_TOP = 0x0123;
    BTN_TOP2 = 0x0124;
    BTN_PINKIE = 0x0125;
    BTN_BASE = 0x0126;
    BTN_BASE2 = 0x0127;
    BTN_BASE3 = 0x0128;
    BTN_BASE4 = 0x0129;
    BTN_BASE5 = 0x012a;
    BTN_BASE6 = 0x012b;
    BTN_DEAD = 0x012f;
    BTN_GAMEPAD | BTN_SOUTH | BTN_A = 0x0130;
    BTN_EAST | BTN_B = 0x0131;
    BTN_C = 0x0132;
    BTN_NORTH | BTN_X = 0x0133;
    BTN_WEST | BTN_Y = 0x0134;
    BTN_Z = 0x0135;
    BTN_TL = 0x0136;
    BTN_TR = 0x0137;
    BTN_TL2 = 0x0138;
    BTN_TR2 = 0x0139;
    BTN_SELECT = 0x013a;
    BTN_START = 0x013b;
    BTN_MODE = 0x013c;
    BTN_THUMBL = 0x013d;
    BTN_THUMBR = 0x013e;
    BTN_DIGI | BTN_TOOL_PEN = 0x0140;
    BTN_TOOL_RUBBER = 0x0141;
    BTN_TOOL_BRUSH = 0x0142;
    BTN_TOOL_PENCIL = 0x0143;
    BTN_TOOL_AIRBRUSH = 0x0144;
    BTN_TOOL_FINGER = 0x0145;
    BTN_TOOL_MOUSE = 0x0146;
    BTN_TOOL_LENS = 0x0147;
    BTN_TOOL_QUINTTAP = 0x0148;
    BTN_TOUCH = 0x014a;
    BTN_STYLUS = 0x014b;
    BTN_STYLUS2 = 0x014c;
    BTN_TOOL_DOUBLETAP = 0x014d;
    BTN_TOOL_TRIPLETAP = 0x014e;
    BTN_TOOL_QUADTAP = 0x014f;
    BTN_WHEEL | BTN_GEAR_DOWN = 0x0150;
    BTN_GEAR_UP = 0x0151;
    KEY_OK = 0x0160;
    KEY_SELECT = 0x0161;
    KEY_GOTO = 0x0162;
    KEY_CLEAR = 0x0163;
    KEY_POWER2 = 0x0164;
    KEY_OPTION = 0x0165;
    KEY_INFO = 0x0166;
    KEY_TIME = 0x0167;
    KEY_VENDOR = 0x0168;
    KEY_ARCHIVE = 0x0169;
    KEY_PROGRAM = 0x016a;
    KEY_CHANNEL = 0x016b;
    KEY_FAVORITES = 0x016c;
    KEY_EPG = 0x016d;
    KEY_PVR = 0x016e;
    KEY_MHP = 0x016f;
    KEY_LANGUAGE = 0x0170;
    KEY_TITLE = 0x0171;
    KEY_SUBTITLE = 0x0172;
    KEY_ANGLE = 0x0173;
    KEY_ZOOM = 0x0174;
    KEY_MODE = 0x0175;
    KEY_KEYBOARD = 0x0176;
    KEY_SCREEN = 0x0177;
    KEY_PC = 0x0178;
    KEY_TV = 0x0179;
    KEY_TV2 = 0x017a;
    KEY_VCR = 0x017b;
    KEY_VCR2 = 0x017c;
    KEY_SAT = 0x017d;
    KEY_SAT2 = 0x017e;
    KEY_CD = 0x017f;
    KEY_TAPE = 0x0180;
    KEY_RADIO = 0x0181;
    KEY_TUNER = 0x0182;
    KEY_PLAYER = 0x0183;
    KEY_TEXT = 0x0184;
    KEY_DVD = 0x0185;
    KEY_AUX = 0x0186;
    KEY_MP3 = 0x0187;
    KEY_AUDIO = 0x0188;
    KEY_VIDEO = 0x0189;
    KEY_DIRECTORY = 0x018a;
    KEY_LIST = 0x018b;
    KEY_MEMO = 0x018c;
    KEY_CALENDAR = 0x018d;
    KEY_RED = 0x018e;
    KEY_GREEN = 0x018f;
    KEY_YELLOW = 0x0190;
    KEY_BLUE = 0x0191;
    KEY_CHANNELUP = 0x0192;
    KEY_CHANNELDOWN = 0x0193;
    KEY_FIRST = 0x0194;
    KEY_LAST = 0x0195;
    KEY_AB = 0x0196;
    KEY_NEXT = 0x0197;
    KEY_RESTART = 0x0198;
    KEY_SLOW = 0x0199;
    KEY_SHUFFLE = 0x019a;
    KEY_BREAK = 0x019b;
    KEY_PREVIOUS = 0x019c;
    KEY_DIGITS = 0x019d;
    KEY_TEEN = 0x019e;
    KEY_TWEN = 0x019f;
    KEY_VIDEOPHONE = 0x01a0;
    KEY_GAMES = 0x01a1;
    KEY_ZOOMIN = 0x01a2;
    KEY_ZOOMOUT = 0x01a3;
    KEY_ZOOMRESET = 0x01a4;
    KEY_WORDPROCESSOR = 0x01a5;
    KEY_EDITOR = 0x01a6;
    KEY_SPREADSHEET = 0x01a7;
    KEY_GRAPHICSEDITOR = 0x01a8;
    KEY_PRESENTATION = 0x01a9;
    KEY_DATABASE = 0x01aa;
    KEY_NEWS = 0x01ab;
    KEY_VOICEMAIL = 0x01ac;
    KEY_ADDRESSBOOK = 0x01ad;
    KEY_MESSENGER = 0x01ae;
    KEY_DISPLAYTOGGLE | KEY_BRIGHTNESS_TOGGLE = 0x01af;
    KEY_SPELLCHECK = 0x01b0;
    KEY_LOGOFF = 0x01b1;
    KEY_DOLLAR = 0x01b2;
    KEY_EURO = 0x01b3;
    KEY_FRAMEBACK = 0x01b4;
    KEY_FRAMEFORWARD = 0x01b5;
    KEY_CONTEXT_MENU = 0x01b6;
    KEY_MEDIA_REPEAT = 0x01b7;
    KEY_10CHANNELSUP = 0x01b8;
    KEY_10CHANNELSDOWN = 0x01b9;
    KEY_IMAGES = 0x01ba;
    KEY_DEL_EOL = 0x01c0;
    KEY_DEL_EOS = 0x01c1;
    KEY_INS_LINE = 0x01c2;
    KEY_DEL_LINE = 0x01c3;
    KEY_FN = 0x01d0;
    KEY_FN_ESC = 0x01d1;
    KEY_FN_F1 = 0x01d2;
    KEY_FN_F2 = 0x01d3;
    KEY_FN_F3 = 0x01d4;
    KEY_FN_F4 = 0x01d5;
    KEY_FN_F5 = 0x01d6;
    KEY_FN_F6 = 0x01d7;
    KEY_FN_F7 = 0x01d8;
    KEY_FN_F8 = 0x01d9;
    KEY_FN_F9 = 0x01da;
    KEY_FN_F10 = 0x01db;
    KEY_FN_F11 = 0x01dc;
    KEY_FN_F12 = 0x01dd;
    KEY_FN_1 = 0x01de;
    KEY_FN_2 = 0x01df;
    KEY_FN_D = 0x01e0;
    KEY_FN_E = 0x01e1;
    KEY_FN_F = 0x01e2;
    KEY_FN_S = 0x01e3;
    KEY_FN_B = 0x01e4;
    KEY_BRL_DOT1 = 0x01f1;
    KEY_BRL_DOT2 = 0x01f2;
    KEY_BRL_DOT3 = 0x01f3;
    KEY_BRL_DOT4 = 0x01f4;
    KEY_BRL_DOT5 = 0x01f5;
    KEY_BRL_DOT6 = 0x01f6;
    KEY_BRL_DOT7 = 0x01f7;
    KEY_BRL_DOT8 = 0x01f8;
    KEY_BRL_DOT9 = 0x01f9;
    KEY_BRL_DOT10 = 0x01fa;
    KEY_NUMERIC_0 = 0x0200;
    KEY_NUMERIC_1 = 0x0201;
    KEY_NUMERIC_2 = 0x0202;
    KEY_NUMERIC_3 = 0x0203;
    KEY_NUMERIC_4 = 0x0204;
    KEY_NUMERIC_5 = 0x0205;
    KEY_NUMERIC_6 = 0x0206;
    KEY_NUMERIC_7 = 0x0207;
    KEY_NUMERIC_8 = 0x0208;
    KEY_NUMERIC_9 = 0x0209;
    KEY_NUMERIC_STAR = 0x020a;
    KEY_NUMERIC_POUND = 0x020b;
    KEY_NUMERIC_A = 0x020c;
    KEY_NUMERIC_B = 0x020d;
    KEY_NUMERIC_C = 0x020e;
    KEY_NUMERIC_D = 0x020f;
    KEY_CAMERA_FOCUS = 0x0210;
    KEY_WPS_BUTTON = 0x0211;
    KEY_TOUCHPAD_TOGGLE = 0x0212;
    KEY_TOUCHPAD_ON = 0x0213;
    KEY_TOUCHPAD_OFF = 0x0214;
    KEY_CAMERA_ZOOMIN = 0x0215;
    KEY_CAMERA_ZOOMOUT = 0x0216;
    KEY_CAMERA_UP = 0x0217;
    KEY_CAMERA_DOWN = 0x0218;
    KEY_CAMERA_LEFT = 0x0219;
    KEY_CAMERA_RIGHT = 0x021a;
    KEY_ATTENDANT_ON = 0x021b;
    KEY_ATTENDANT_OFF = 0x021c;
    KEY_ATTENDANT_TOGGLE = 0x021d;
    KEY_LIGHTS_TOGGLE = 0x021e;
    BTN_DPAD_UP = 0x0220;
    BTN_DPAD_DOWN = 0x0221;
    BTN_DPAD_LEFT = 0x0222;
    BTN_DPAD_RIGHT = 0x0223;
    KEY_ALS_TOGGLE = 0x0230;
    KEY_BUTTONCONFIG = 0x0240;
    KEY_TASKMANAGER = 0x0241;
    KEY_JOURNAL = 0x0242;
    KEY_CONTROLPANEL = 0x0243;
    KEY_APPSELECT = 0x0244;
    KEY_SCREENSAVER = 0x0245;
    KEY_VOICECOMMAND = 0x0246;
    KEY_ASSISTANT = 0x0247;
    KEY_BRIGHTNESS_MIN = 0x0250;
    KEY_BRIGHTNESS_MAX = 0x0251;
    KEY_KBDINPUTASSIST_PREV = 0x0260;
    KEY_KBDINPUTASSIST_NEXT = 0x0261;
    KEY_KBDINPUTASSIST_PREVGROUP = 0x0262;
    KEY_KBDINPUTASSIST_NEXTGROUP = 0x0263;
    KEY_KBDINPUTASSIST_ACCEPT = 0x0264;
    KEY_KBDINPUTASSIST_CANCEL = 0x0265;
    KEY_RIGHT_UP = 0x0266;
    KEY_RIGHT_DOWN = 0x0267;
    KEY_LEFT_UP = 0x0268;
    KEY_LEFT_DOWN = 0x0269;
    KEY_ROOT_MENU = 0x026a;
    KEY_MEDIA_TOP_MENU = 0x026b;
    KEY_NUMERIC_11 = 0x026c;
    KEY_NUMERIC_12 = 0x026d;
    KEY_AUDIO_DESC = 0x026e;
    KEY_3D_MODE = 0x026f;
    KEY_NEXT_FAVORITE = 0x0270;
    KEY_STOP_RECORD = 0x0271;
    KEY_PAUSE_RECORD = 0x0272;
    KEY_VOD = 0x0273;
    KEY_UNMUTE = 0x0274;
    KEY_FASTREVERSE = 0x0275;
    KEY_SLOWREVERSE = 0x0276;
    KEY_DATA = 0x0277;
    KEY_ONSCREEN_KEYBOARD = 0x0278;
    BTN_TRIGGER_HAPPY | BTN_TRIGGER_HAPPY1 = 0x02c0;
    BTN_TRIGGER_HAPPY2 = 0x02c1;
    BTN_TRIGGER_HAPPY3 = 0x02c2;
    BTN_TRIGGER_HAPPY4 = 0x02c3;
    BTN_TRIGGER_HAPPY5 = 0x02c4;
    BTN_TRIGGER_HAPPY6 = 0x02c5;
    BTN_TRIGGER_HAPPY7 = 0x02c6;
    BTN_TRIGGER_HAPPY8 = 0x02c7;
    BTN_TRIGGER_HAPPY9 = 0x02c8;
    BTN_TRIGGER_HAPPY10 = 0x02c9;
    BTN_TRIGGER_HAPPY11 = 0x02ca;
    BTN_TRIGGER_HAPPY12 = 0x02cb;
    BTN_TRIGGER_HAPPY13 = 0x02cc;
    BTN_TRIGGER_HAPPY14 = 0x02cd;
    BTN_TRIGGER_HAPPY15 = 0x02ce;
    BTN_TRIGGER_HAPPY16 = 0x02cf;
    BTN_TRIGGER_HAPPY17 = 0x02d0;
    BTN_TRIGGER_HAPPY18 = 0x02d1;
    BTN_TRIGGER_HAPPY19 = 0x02d2;
    BTN_TRIGGER_HAPPY20 = 0x02d3;
    BTN_TRIGGER_HAPPY21 = 0x02d4;
    BTN_TRIGGER_HAPPY22 = 0x02d5;
    BTN_TRIGGER_HAPPY23 = 0x02d6;
    BTN_TRIGGER_HAPPY24 = 0x02d7;
    BTN_TRIGGER_HAPPY25 = 0x02d8;
    BTN_TRIGGER_HAPPY26 = 0x02d9;
    BTN_TRIGGER_HAPPY27 = 0x02da;
    BTN_TRIGGER_HAPPY28 = 0x02db;
    BTN_TRIGGER_HAPPY29 = 0x02dc;
    BTN_TRIGGER_HAPPY30 = 0x02dd;
    BTN_TRIGGER_HAPPY31 = 0x02de;
    BTN_TRIGGER_HAPPY32 = 0x02df;
    BTN_TRIGGER_HAPPY33 = 0x02e0;
    BTN_TRIGGER_HAPPY34 = 0x02e1;
    BTN_TRIGGER_HAPPY35 = 0x02e2;
    BTN_TRIGGER_HAPPY36 = 0x02e3;
    BTN_TRIGGER_HAPPY37 = 0x02e4;
    BTN_TRIGGER_HAPPY38 = 0x02e5;
    BTN_TRIGGER_HAPPY39 = 0x02e6;
    BTN_TRIGGER_HAPPY40 = 0x02e7;
    KEY_MAX = 0x02ff;
    KEY_CNT = 0x0300;
}

code_space! {
    /// Relative axes (`EV_REL`).
    pub struct RelCode;

    REL_X = 0x0000;
    REL_Y = 0x0001;
    REL_Z = 0x0002;
    REL_RX = 0x0003;
    REL_RY = 0x0004;
    REL_RZ = 0x0005;
    REL_HWHEEL = 0x0006;
    REL_DIAL = 0x0007;
    REL_WHEEL = 0x0008;
    REL_MISC = 0x0009;
    REL_MAX = 0x000f;
    REL_CNT = 0x0010;
}

code_space! {
    /// Absolute axes (`EV_ABS`).
    pub struct AbsCode;

    ABS_X = 0x0000;
    ABS_Y = 0x0001;
    ABS_Z = 0x0002;
    ABS_RX = 0x0003;
    ABS_RY = 0x0004;
    ABS_RZ = 0x0005;
    ABS_THROTTLE = 0x0006;
    ABS_RUDDER = 0x0007;
    ABS_WHEEL = 0x0008;
    ABS_GAS = 0x0009;
    ABS_BRAKE = 0x000a;
    ABS_HAT0X = 0x0010;
    ABS_HAT0Y = 0x0011;
    ABS_HAT1X = 0x0012;
    ABS_HAT1Y = 0x0013;
    ABS_HAT2X = 0x0014;
    ABS_HAT2Y = 0x0015;
    ABS_HAT3X = 0x0016;
    ABS_HAT3Y = 0x0017;
    ABS_PRESSURE = 0x0018;
    ABS_DISTANCE = 0x0019;
    ABS_TILT_X = 0x001a;
    ABS_TILT_Y = 0x001b;
    ABS_TOOL_WIDTH = 0x001c;
    ABS_VOLUME = 0x0020;
    ABS_MISC = 0x0028;
    ABS_MT_SLOT = 0x002f;
    ABS_MT_TOUCH_MAJOR = 0x0030;
    ABS_MT_TOUCH_MINOR = 0x0031;
    ABS_MT_WIDTH_MAJOR = 0x0032;
    ABS_MT_WIDTH_MINOR = 0x0033;
    ABS_MT_ORIENTATION = 0x0034;
    ABS_MT_POSITION_X = 0x0035;
    ABS_MT_POSITION_Y = 0x0036;
    ABS_MT_TOOL_TYPE = 0x0037;
    ABS_MT_BLOB_ID = 0x0038;
    ABS_MT_TRACKING_ID = 0x0039;
    ABS_MT_PRESSURE = 0x003a;
    ABS_MT_DISTANCE = 0x003b;
    ABS_MT_TOOL_X = 0x003c;
    ABS_MT_TOOL_Y = 0x003d;
    ABS_MAX = 0x003f;
    ABS_CNT = 0x0040;
}

code_space! {
    /// Miscellaneous events (`EV_MSC`).
    pub struct MscCode;

    MSC_SERIAL = 0x0000;
    MSC_PULSELED = 0x0001;
    MSC_GESTURE = 0x0002;
    MSC_RAW = 0x0003;
    MSC_SCAN = 0x0004;
    MSC_TIMESTAMP = 0x0005;
    MSC_MAX = 0x0007;
    MSC_CNT = 0x0008;
}

code_space! {
    /// Switches (`EV_SW`).
    pub struct SwCode;

    SW_LID = 0x0000;
    SW_TABLET_MODE = 0x0001;
    SW_HEADPHONE_INSERT = 0x0002;
    SW_RFKILL_ALL | SW_RADIO = 0x0003;
    SW_MICROPHONE_INSERT = 0x0004;
    SW_DOCK = 0x0005;
    SW_LINEOUT_INSERT = 0x0006;
    SW_JACK_PHYSICAL_INSERT = 0x0007;
    SW_VIDEOOUT_INSERT = 0x0008;
    SW_CAMERA_LENS_COVER = 0x0009;
    SW_KEYPAD_SLIDE = 0x000a;
    SW_FRONT_PROXIMITY = 0x000b;
    SW_ROTATE_LOCK = 0x000c;
    SW_LINEIN_INSERT = 0x000d;
    SW_MUTE_DEVICE = 0x000e;
    SW_PEN_INSERTED | SW_MAX = 0x000f;
    SW_CNT = 0x0010;
}

code_space! {
    /// LEDs (`EV_LED`).
    pub struct LedCode;

    LED_NUML = 0x0000;
    LED_CAPSL = 0x0001;
    LED_SCROLLL = 0x0002;
    LED_COMPOSE = 0x0003;
    LED_KANA = 0x0004;
    LED_SLEEP = 0x0005;
    LED_SUSPEND = 0x0006;
    LED_MUTE = 0x0007;
    LED_MISC = 0x0008;
    LED_MAIL = 0x0009;
    LED_CHARGING = 0x000a;
    LED_MAX = 0x000f;
    LED_CNT = 0x0010;
}

code_space! {
    /// Sounds (`EV_SND`).
    pub struct SndCode;

    SND_CLICK = 0x0000;
    SND_BELL = 0x0001;
    SND_TONE = 0x0002;
    SND_MAX = 0x0007;
    SND_CNT = 0x0008;
}

code_space! {
    /// Autorepeat parameters (`EV_REP`).
    pub struct RepCode;

    REP_DELAY = 0x0000;
    REP_PERIOD | REP_MAX = 0x0001;
    REP_CNT = 0x0002;
}
